pub mod advisors;
pub mod contagion;
pub mod demography;
pub mod economy;
pub mod logging;
pub mod narrative;
pub mod trust;
pub mod upkeep;

pub use advisors::*;
pub use contagion::*;
pub use demography::*;
pub use economy::*;
pub use logging::*;
pub use narrative::*;
pub use trust::*;
pub use upkeep::*;
