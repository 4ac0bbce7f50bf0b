use std::fmt;

/// The only fragment selecting the admin console.
pub const ADMIN_FRAGMENT: &str = "#admin";

/// Top-level view, derived from the location fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Submission,
    Admin,
}

impl Route {
    /// Exactly `#admin` selects the admin view, anything else falls back to
    /// the submission form.
    pub fn from_fragment(fragment: &str) -> Self {
        if fragment == ADMIN_FRAGMENT {
            Self::Admin
        } else {
            Self::Submission
        }
    }

    /// Canonical fragment for this route.
    pub fn fragment(&self) -> &'static str {
        match self {
            Self::Submission => "",
            Self::Admin => ADMIN_FRAGMENT,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Self::Submission => Self::Admin,
            Self::Admin => Self::Submission,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Submission => write!(f, "submission"),
            Self::Admin => write!(f, "admin"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_fragment_selects_admin() {
        assert_eq!(Route::from_fragment("#admin"), Route::Admin);
    }

    #[test]
    fn everything_else_selects_submission() {
        for fragment in ["", "#", "#anything-else", "admin", "#Admin", "#admin/", " #admin"] {
            assert_eq!(
                Route::from_fragment(fragment),
                Route::Submission,
                "fragment {:?}",
                fragment
            );
        }
    }

    #[test]
    fn fragment_round_trip_and_toggle() {
        for route in [Route::Submission, Route::Admin] {
            assert_eq!(Route::from_fragment(route.fragment()), route);
            assert_eq!(route.toggled().toggled(), route);
            assert_ne!(route.toggled(), route);
        }
        assert_eq!(Route::default(), Route::Submission);
    }
}
