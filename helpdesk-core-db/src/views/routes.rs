use helpdesk_core_api::domain::common_enums::UserRole;
use helpdesk_core_api::domain::identity::Identity;

/// The application's route table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Signup,
    CustomerDashboard,
    AgentDashboard,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::CustomerDashboard => "/customer",
            Route::AgentDashboard => "/agent",
        }
    }

    /// Role required to enter the route, if it is gated.
    pub fn required_role(&self) -> Option<UserRole> {
        match self {
            Route::CustomerDashboard => Some(UserRole::Customer),
            Route::AgentDashboard => Some(UserRole::Agent),
            _ => None,
        }
    }
}

/// Outcome of a route guard check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Granted,
    /// Unauthenticated access to a gated route.
    RedirectToLogin,
    /// Authenticated, but the wrong role for this route.
    RedirectToLanding,
}

/// Guard for role-gated routes: no identity redirects to login, a role
/// mismatch redirects to the landing page. Open routes are always granted.
pub fn route_access(route: Route, identity: Option<&Identity>) -> RouteAccess {
    match route.required_role() {
        None => RouteAccess::Granted,
        Some(required) => match identity {
            None => RouteAccess::RedirectToLogin,
            Some(identity) if identity.role == required => RouteAccess::Granted,
            Some(_) => RouteAccess::RedirectToLanding,
        },
    }
}

/// Where a freshly signed-in identity lands.
pub fn home_route(identity: &Identity) -> Route {
    match identity.role {
        UserRole::Customer => Route::CustomerDashboard,
        UserRole::Agent => Route::AgentDashboard,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn customer() -> Identity {
        Identity::new(Uuid::new_v4(), "a@b.com", UserRole::Customer).unwrap()
    }

    fn agent() -> Identity {
        Identity::new(Uuid::new_v4(), "agent1@support.com", UserRole::Agent).unwrap()
    }

    #[test]
    fn open_routes_need_no_identity() {
        assert_eq!(route_access(Route::Landing, None), RouteAccess::Granted);
        assert_eq!(route_access(Route::Login, None), RouteAccess::Granted);
        assert_eq!(route_access(Route::Signup, None), RouteAccess::Granted);
    }

    #[test]
    fn gated_routes_redirect_unauthenticated_to_login() {
        assert_eq!(
            route_access(Route::CustomerDashboard, None),
            RouteAccess::RedirectToLogin
        );
        assert_eq!(
            route_access(Route::AgentDashboard, None),
            RouteAccess::RedirectToLogin
        );
    }

    #[test]
    fn role_mismatch_redirects_to_landing() {
        let customer = customer();
        let agent = agent();
        assert_eq!(
            route_access(Route::AgentDashboard, Some(&customer)),
            RouteAccess::RedirectToLanding
        );
        assert_eq!(
            route_access(Route::CustomerDashboard, Some(&agent)),
            RouteAccess::RedirectToLanding
        );
        assert_eq!(
            route_access(Route::CustomerDashboard, Some(&customer)),
            RouteAccess::Granted
        );
    }

    #[test]
    fn home_route_follows_role() {
        assert_eq!(home_route(&customer()), Route::CustomerDashboard);
        assert_eq!(home_route(&agent()), Route::AgentDashboard);
        assert_eq!(home_route(&agent()).path(), "/agent");
    }
}
