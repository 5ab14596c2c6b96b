pub mod agent;
pub mod namespace;
pub mod resource;
pub mod team;

pub use agent::{AgentDocument, DependencyMap};
pub use namespace::{Namespace, PackContext};
pub use resource::{ResourceReference, ResourceType, OVERRIDE_CATEGORIES};
pub use team::{TeamDocument, TeamManifest};
