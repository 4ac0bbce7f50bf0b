#![windows_subsystem = "windows"]

use std::{error::Error, io::Write, sync::Arc};

#[cfg(target_os = "linux")]
use iced::window::settings::PlatformSpecific;
use iced::{Settings, Size};
use tracing::error;

use kyc::{api::VerificationApi, config::Config, host::Host};
use kyc_gui::{
    args::{args_to_options, parse_args},
    logger::{parse_log_level, setup_logger},
    state::State,
    VERSION,
};
use kyc_ui::{component::text, font, theme};

fn main() -> Result<(), Box<dyn Error>> {
    let args = parse_args(std::env::args().collect(), VERSION)?;
    let options = args_to_options(&args)?;

    std::fs::create_dir_all(&options.datadir)?;
    let mut config = Config::load(&options.datadir)?;
    if let Some(url) = &options.api_url {
        config.set_api_url(url)?;
    }
    if let Some(user_agent) = options.user_agent.clone() {
        config.user_agent = Some(user_agent);
    }

    let log_level = parse_log_level()?.unwrap_or(config.log_level);
    setup_logger(log_level, &options.datadir)?;
    setup_panic_hook();
    tracing::info!("kyc-gui {} starting with {:?}", VERSION, config);

    let api: Arc<dyn VerificationApi> = Arc::new(config.http_client()?);
    let check = config.credential_check();
    let host = Host::new(config.user_agent(), options.fragment);

    let settings = Settings {
        id: Some("kyc-gui".to_string()),
        antialiasing: false,

        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        fonts: Vec::new(),
    };

    // Phone sized, the submission form needs a mobile viewport on desktops.
    #[allow(unused_mut)]
    let mut window_settings = iced::window::Settings {
        size: Size {
            width: 420.0,
            height: 820.0,
        },
        min_size: Some(Size {
            width: 320.0,
            height: 480.0,
        }),
        position: iced::window::Position::Default,
        ..Default::default()
    };

    #[cfg(target_os = "linux")]
    {
        window_settings.platform_specific = PlatformSpecific {
            application_id: "kyc-gui".to_string(),
            ..Default::default()
        };
    }

    if let Err(e) = iced::application(State::title, State::update, State::view)
        .theme(|_| theme::Theme::default())
        .subscription(State::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || State::init(host, api, check))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

// A panic in any thread should stop the main thread, and print the panic.
fn setup_panic_hook() {
    std::panic::set_hook(Box::new(move |panic_info| {
        let file = panic_info
            .location()
            .map(|l| l.file())
            .unwrap_or_else(|| "'unknown'");
        let line = panic_info
            .location()
            .map(|l| l.line().to_string())
            .unwrap_or_else(|| "'unknown'".to_string());

        let bt = backtrace::Backtrace::new();
        let info = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned());
        error!(
            "panic occurred at line {} of file {}: {:?}\n{:?}",
            line, file, info, bt
        );

        let _ = std::io::stdout().flush();
        std::process::exit(1);
    }));
}
