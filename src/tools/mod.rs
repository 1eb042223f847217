//! The tool catalog: every descriptor fed to the registry at startup.
//!
//! Pure enumeration: each family module builds its descriptors with `json!`
//! input schemas and a handler closure bound to the shared client. The
//! registry decides per descriptor whether the tool is actually exposed.

pub mod admin;
pub mod applications;
pub mod by_type;
pub mod events;
pub mod flows;
pub mod groups;
pub mod tokens;
pub mod users;

mod args;

#[cfg(test)]
mod tests;

use std::future::Future;
use std::sync::Arc;

use log::info;
use serde_json::Value;

use crate::api::AuthentikClient;
use crate::error::ToolError;
use crate::registry::{ToolDescriptor, ToolHandler, ToolRegistry};

/// Builds the full catalog in fixed family order. The order only affects
/// how tools are listed to the agent.
pub fn catalog(client: &Arc<AuthentikClient>) -> Vec<ToolDescriptor> {
    let mut tools = Vec::new();
    tools.extend(users::tools(client));
    tools.extend(groups::tools(client));
    tools.extend(applications::tools(client));
    tools.extend(tokens::tools(client));
    tools.extend(flows::tools(client));
    tools.extend(by_type::tools(client));
    tools.extend(events::tools(client));
    tools.extend(admin::tools(client));
    tools
}

/// Feeds the whole catalog through the registry, returning how many tools
/// the runtime configuration actually exposed.
pub fn register_all(registry: &mut ToolRegistry, client: &Arc<AuthentikClient>) -> usize {
    let mut exposed = 0;
    for descriptor in catalog(client) {
        if registry.register(descriptor) {
            exposed += 1;
        }
    }
    info!("{exposed} tools exposed");
    exposed
}

/// Binds an async tool body to the shared client as a [`ToolHandler`].
pub(crate) fn bind<F, Fut>(client: &Arc<AuthentikClient>, run: F) -> ToolHandler
where
    F: Fn(Arc<AuthentikClient>, Value) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<String, ToolError>> + Send + 'static,
{
    let client = Arc::clone(client);
    Arc::new(move |arguments| Box::pin(run(Arc::clone(&client), arguments)))
}
