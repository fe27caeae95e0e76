//! Static route registry.
//!
//! Routes are declared once as statics. Only the fallback of virtual routes
//! has runtime behavior: direct navigation to a fragment-only URL is
//! redirected to the page that owns it. Methods, interaction kinds and
//! permissions are documentation and are not enforced.

use axum::http::Method;
use std::fmt;

/// Permission codes attached to routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Ap01,
    Ap02,
    Ap03,
    Ap04,
}

impl Permission {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Ap01 => "AP01",
            Self::Ap02 => "AP02",
            Self::Ap03 => "AP03",
            Self::Ap04 => "AP04",
        }
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How the browser reaches a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Full page load, always a GET.
    Main,
    /// AJAX-only endpoint, never shown in the address bar.
    Api,
    /// Shown in the address bar through history pushes but has no page of its
    /// own; requires a fallback.
    Virtual,
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Main => "main",
            Self::Api => "api",
            Self::Virtual => "virtual",
        };
        f.write_str(s)
    }
}

/// A named route with optional fallback target.
#[derive(Debug)]
pub struct Route {
    pub path: &'static str,
    pub method: Method,
    pub interaction: Interaction,
    pub permissions: &'static [Permission],
    pub fallback: Option<&'static Route>,
}

impl Route {
    pub fn is_virtual(&self) -> bool {
        self.interaction == Interaction::Virtual
    }
}

pub static DEMO03: Route = Route {
    path: "/demo03",
    method: Method::GET,
    interaction: Interaction::Main,
    permissions: &[Permission::Ap01],
    fallback: None,
};

pub static DEMO03_MONTH: Route = Route {
    path: "/demo03-month",
    method: Method::GET,
    interaction: Interaction::Virtual,
    permissions: &[],
    fallback: Some(&DEMO03),
};

pub static DEMO03_FAV_COLOUR: Route = Route {
    path: "/demo03-fav-colour",
    method: Method::GET,
    interaction: Interaction::Virtual,
    permissions: &[],
    fallback: Some(&DEMO03),
};

pub static DEMO03_THANKYOU: Route = Route {
    path: "/demo03-thankyou",
    method: Method::GET,
    interaction: Interaction::Virtual,
    permissions: &[],
    fallback: Some(&DEMO03),
};

/// Every registered route.
pub static ROUTES: [&Route; 4] = [&DEMO03, &DEMO03_MONTH, &DEMO03_FAV_COLOUR, &DEMO03_THANKYOU];

/// Misconfigured route table.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("virtual route {0} has no fallback")]
    MissingFallback(&'static str),
    #[error("route {0} falls back to virtual route {1}")]
    VirtualFallback(&'static str, &'static str),
}

/// Virtual routes from `routes`, in declaration order.
pub fn virtual_routes<'a>(
    routes: &'a [&'static Route],
) -> impl Iterator<Item = &'static Route> + 'a {
    routes.iter().copied().filter(|r| r.is_virtual())
}

/// Checks that every virtual route falls back to a non-virtual route.
///
/// # Errors
///
/// Returns the first offending route.
pub fn validate(routes: &[&'static Route]) -> Result<(), RegistryError> {
    for route in virtual_routes(routes) {
        match route.fallback {
            None => return Err(RegistryError::MissingFallback(route.path)),
            Some(target) if target.is_virtual() => {
                return Err(RegistryError::VirtualFallback(route.path, target.path));
            }
            Some(_) => {}
        }
    }
    Ok(())
}
