//! Screen routes and the back stack.
//!
//! Routes carry only name and surname; the other fields are re-read from
//! the store by the destination screen. Segments are taken verbatim, so a
//! name containing `/` does not survive [`Route::parse`].

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Profile { name: String, surname: String },
    Bmi { name: String, surname: String },
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Self::Home => "home".to_string(),
            Self::Profile { name, surname } => format!("profile/{}/{}", name, surname),
            Self::Bmi { name, surname } => format!("bmi/{}/{}", name, surname),
        }
    }

    pub fn parse(path: &str) -> Option<Self> {
        let mut parts = path.split('/');
        let screen = parts.next()?;
        if screen == "home" {
            return parts.next().is_none().then_some(Self::Home);
        }

        let name = parts.next()?.to_string();
        let surname = parts.next()?.to_string();
        if parts.next().is_some() {
            return None;
        }
        match screen {
            "profile" => Some(Self::Profile { name, surname }),
            "bmi" => Some(Self::Bmi { name, surname }),
            _ => None,
        }
    }

    /// Name parameter, if the route has one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Home => None,
            Self::Profile { name, .. } | Self::Bmi { name, .. } => Some(name.as_str()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Back stack rooted at [`Route::Home`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> &Route {
        // The root is never popped.
        &self.stack[self.stack.len() - 1]
    }

    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(route = %route, "Navigate");
        self.stack.push(route);
    }

    /// Pop the current route. Returns the popped route, or `None` at home.
    pub fn back(&mut self) -> Option<Route> {
        if self.stack.len() <= 1 {
            return None;
        }
        self.stack.pop()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}
