//! Composition root: combines device classification and fragment routing to
//! pick the single screen to display.

use crate::{
    device::DeviceKind,
    events::Listener,
    host::Host,
    route::Route,
};

/// What the window shows. Exactly one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Loading,
    AccessDenied,
    Routed(Route),
}

#[derive(Debug, Default)]
pub struct Shell {
    user_agent: String,
    device: Option<DeviceKind>,
    route: Option<Route>,
    on_resize: Option<Listener<f32>>,
    on_fragment_change: Option<Listener<String>>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribes to the host events and runs a first classification and
    /// routing pass. Mounting twice keeps a single pair of listeners.
    pub fn mount(&mut self, host: &mut Host) {
        if self.is_mounted() {
            return;
        }
        self.user_agent = host.user_agent.clone();
        self.on_resize = Some(host.viewport.on_resize());
        self.on_fragment_change = Some(host.location.on_fragment_change());

        self.device = host
            .viewport
            .width()
            .map(|width| DeviceKind::classify(&self.user_agent, width));
        self.route = Some(Route::from_fragment(host.location.fragment()));
        tracing::info!(
            "shell mounted: device={:?} route={:?}",
            self.device,
            self.route
        );
    }

    /// Drops both listeners. Detection state is kept so a remount starts from
    /// the last known values.
    pub fn unmount(&mut self) {
        self.on_resize = None;
        self.on_fragment_change = None;
    }

    pub fn is_mounted(&self) -> bool {
        self.on_resize.is_some() && self.on_fragment_change.is_some()
    }

    /// Applies pending host events. Returns true if the screen may have
    /// changed.
    pub fn sync(&mut self) -> bool {
        let mut changed = false;
        if let Some(width) = self.on_resize.as_ref().and_then(|l| l.latest()) {
            let device = DeviceKind::classify(&self.user_agent, width);
            changed |= self.device != Some(device);
            self.device = Some(device);
        }
        if let Some(fragment) = self.on_fragment_change.as_ref().and_then(|l| l.latest()) {
            let route = Route::from_fragment(&fragment);
            changed |= self.route != Some(route);
            self.route = Some(route);
        }
        changed
    }

    pub fn screen(&self) -> Screen {
        match (self.device, self.route) {
            (Some(device), Some(route)) => {
                if !device.is_mobile() && route == Route::Submission {
                    Screen::AccessDenied
                } else {
                    Screen::Routed(route)
                }
            }
            _ => Screen::Loading,
        }
    }

    pub fn route(&self) -> Option<Route> {
        self.route
    }

    pub fn is_mobile(&self) -> bool {
        self.device.map(|d| d.is_mobile()).unwrap_or(false)
    }

    /// Header action: flips the route by rewriting the host fragment, the
    /// route itself follows on the next [`Shell::sync`].
    pub fn toggle_route(&self, host: &mut Host) {
        let next = self.route.unwrap_or_default().toggled();
        host.location.set_fragment(next.fragment());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESKTOP_UA: &str = "Mozilla/5.0 (X11; Linux x86_64)";
    const PHONE_UA: &str = "Mozilla/5.0 (Linux; Android 14; Pixel 8) Mobile";

    fn mounted(host: &mut Host) -> Shell {
        let mut shell = Shell::new();
        shell.mount(host);
        shell
    }

    #[test]
    fn loading_until_width_known() {
        let mut host = Host::new(DESKTOP_UA, "");
        let mut shell = mounted(&mut host);
        assert_eq!(shell.screen(), Screen::Loading);

        host.viewport.resize(1280.0);
        assert!(shell.sync());
        assert_eq!(shell.screen(), Screen::AccessDenied);
    }

    #[test]
    fn unmounted_shell_is_loading() {
        let shell = Shell::new();
        assert_eq!(shell.screen(), Screen::Loading);
        assert!(!shell.is_mobile());
        assert_eq!(shell.route(), None);
    }

    #[test]
    fn access_denied_only_for_desktop_submission() {
        let cases = [
            (DESKTOP_UA, 1280.0, "", Screen::AccessDenied),
            (DESKTOP_UA, 1280.0, "#admin", Screen::Routed(Route::Admin)),
            (DESKTOP_UA, 600.0, "", Screen::Routed(Route::Submission)),
            (PHONE_UA, 1280.0, "#other", Screen::Routed(Route::Submission)),
            (PHONE_UA, 1280.0, "#admin", Screen::Routed(Route::Admin)),
        ];
        for (ua, width, fragment, expected) in cases {
            let mut host = Host::new(ua, fragment).with_width(width);
            let shell = mounted(&mut host);
            assert_eq!(shell.screen(), expected, "{} {} {:?}", ua, width, fragment);
        }
    }

    #[test]
    fn resize_reclassifies_device() {
        let mut host = Host::new(DESKTOP_UA, "").with_width(500.0);
        let mut shell = mounted(&mut host);
        assert_eq!(shell.screen(), Screen::Routed(Route::Submission));
        assert!(shell.is_mobile());

        host.viewport.resize(900.0);
        host.viewport.resize(1400.0);
        assert!(shell.sync());
        assert_eq!(shell.screen(), Screen::AccessDenied);

        host.viewport.resize(768.0);
        shell.sync();
        assert_eq!(shell.screen(), Screen::Routed(Route::Submission));
    }

    #[test]
    fn fragment_change_is_idempotent() {
        let mut host = Host::new(PHONE_UA, "").with_width(400.0);
        let mut shell = mounted(&mut host);

        host.location.set_fragment("#admin");
        assert!(shell.sync());
        assert_eq!(shell.route(), Some(Route::Admin));

        host.location.set_fragment("#admin");
        assert!(!shell.sync());
        assert_eq!(shell.route(), Some(Route::Admin));

        host.location.set_fragment("#nope");
        shell.sync();
        assert_eq!(shell.route(), Some(Route::Submission));
    }

    #[test]
    fn toggle_flips_route_through_fragment() {
        let mut host = Host::new(DESKTOP_UA, "#admin").with_width(1280.0);
        let mut shell = mounted(&mut host);
        assert_eq!(shell.screen(), Screen::Routed(Route::Admin));

        shell.toggle_route(&mut host);
        assert_eq!(host.location.fragment(), "");
        shell.sync();
        // the header does not enforce the device gate, the shell does
        assert_eq!(shell.screen(), Screen::AccessDenied);

        shell.toggle_route(&mut host);
        assert_eq!(host.location.fragment(), "#admin");
        shell.sync();
        assert_eq!(shell.screen(), Screen::Routed(Route::Admin));
    }

    #[test]
    fn mount_and_unmount_are_symmetric() {
        let mut host = Host::new(DESKTOP_UA, "");
        assert_eq!(host.viewport.listener_count(), 0);
        assert_eq!(host.location.listener_count(), 0);

        let mut shell = mounted(&mut host);
        shell.mount(&mut host);
        assert!(shell.is_mounted());
        assert_eq!(host.viewport.listener_count(), 1);
        assert_eq!(host.location.listener_count(), 1);

        shell.unmount();
        assert!(!shell.is_mounted());
        assert_eq!(host.viewport.listener_count(), 0);
        assert_eq!(host.location.listener_count(), 0);

        // events while unmounted are not observed
        host.viewport.resize(300.0);
        assert!(!shell.sync());

        shell.mount(&mut host);
        assert_eq!(host.viewport.listener_count(), 1);
        assert_eq!(shell.screen(), Screen::Routed(Route::Submission));
        drop(shell);
        assert_eq!(host.viewport.listener_count(), 0);
        assert_eq!(host.location.listener_count(), 0);
    }
}
