// Navigator Port (client-side routing)

use crate::domain::Route;

#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Request navigation to `route`
    fn navigate(&self, route: &Route);
}
