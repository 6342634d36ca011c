use std::fmt;

/// Landing route for unauthenticated visitors.
pub const ROOT_ROUTE: &str = "/";

/// Named routes of the storefront.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Products,
    ProductDetail(String),
    Cart,
    Checkout,
    Community,
    Hakeems,
    Profile,
    Orders,
    Contact,
}

impl Route {
    /// Maps a request path onto a route. Query strings, fragments and a
    /// trailing slash are ignored.
    pub fn resolve(path: &str) -> Option<Self> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Self::Home),
            ["about"] => Some(Self::About),
            ["products"] => Some(Self::Products),
            ["products", id] => Some(Self::ProductDetail((*id).to_string())),
            ["cart"] => Some(Self::Cart),
            ["checkout"] => Some(Self::Checkout),
            ["community"] => Some(Self::Community),
            ["hakeems"] => Some(Self::Hakeems),
            ["profile"] => Some(Self::Profile),
            ["orders"] => Some(Self::Orders),
            ["contact"] => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => ROOT_ROUTE.to_string(),
            Self::About => "/about".to_string(),
            Self::Products => "/products".to_string(),
            Self::ProductDetail(id) => format!("/products/{id}"),
            Self::Cart => "/cart".to_string(),
            Self::Checkout => "/checkout".to_string(),
            Self::Community => "/community".to_string(),
            Self::Hakeems => "/hakeems".to_string(),
            Self::Profile => "/profile".to_string(),
            Self::Orders => "/orders".to_string(),
            Self::Contact => "/contact".to_string(),
        }
    }

    /// Routes that require a signed-in identity.
    pub fn is_protected(&self) -> bool {
        matches!(
            self,
            Self::Cart | Self::Checkout | Self::Community | Self::Profile | Self::Orders
        )
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
