//! Route surface
//!
//! Path-style navigation between the public landing screen, the menu
//! browser, the cart/checkout flow, the auth screens, and the
//! authenticated dashboard area.

/// Navigable screens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Public landing screen
    Home,
    /// Menu and category browser
    Menu,
    Cart,
    Checkout,
    SignIn,
    SignUp,
    /// Account overview and order history
    Dashboard,
    /// Live status for one order
    OrderStatus { id: String },
}

impl Route {
    /// Whether unauthenticated access redirects to sign-in
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard | Route::OrderStatus { .. })
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Kopi",
            Route::Menu => "Menu",
            Route::Cart => "Cart",
            Route::Checkout => "Checkout",
            Route::SignIn => "Sign In",
            Route::SignUp => "Sign Up",
            Route::Dashboard => "My Orders",
            Route::OrderStatus { .. } => "Order Status",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_area_requires_auth() {
        assert!(Route::Dashboard.requires_auth());
        assert!(Route::OrderStatus { id: "ord-1".to_string() }.requires_auth());

        assert!(!Route::Home.requires_auth());
        assert!(!Route::Menu.requires_auth());
        assert!(!Route::Cart.requires_auth());
        assert!(!Route::SignIn.requires_auth());
    }
}
