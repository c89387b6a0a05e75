use serde::de::DeserializeOwned;
use serde::Deserialize;
use wasm_bindgen::JsValue;

use crate::core::error::{BoardError, BoardResult};
use crate::core::serde_utils::opt_id_string;
use crate::models::{Employee, Project, Task};

/// Name of the global object the hosting page fills before the app starts.
pub const BOOTSTRAP_GLOBAL: &str = "__PROJECT_BOARD__";

/// Server-rendered page data the app is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bootstrap {
    pub projects: Vec<Project>,
    pub tasks: Vec<Task>,
    pub employees: Vec<Employee>,
    pub socket_url: Option<String>,
    /// Page to open first: `projects`, `kanban`, `calendar` or `employees`.
    pub page: Option<String>,
    pub project_id: Option<String>,
}

#[derive(Deserialize, Default)]
struct RawBootstrap {
    #[serde(default)]
    projects: Vec<serde_json::Value>,
    #[serde(default)]
    tasks: Vec<serde_json::Value>,
    #[serde(default)]
    employees: Vec<serde_json::Value>,
    #[serde(default)]
    socket_url: Option<String>,
    #[serde(default)]
    page: Option<String>,
    #[serde(default, deserialize_with = "opt_id_string")]
    project_id: Option<String>,
}

/// Parsed bootstrap plus one message per entry that had to be dropped.
pub struct BootstrapLoad {
    pub bootstrap: Bootstrap,
    pub skipped: Vec<String>,
}

fn parse_entries<T: DeserializeOwned>(kind: &str, values: Vec<serde_json::Value>, skipped: &mut Vec<String>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| match serde_json::from_value(v) {
            Ok(entry) => Some(entry),
            Err(e) => {
                skipped.push(format!("Skipping {} #{}: {}", kind, i, e));
                None
            }
        })
        .collect()
}

/// Parse bootstrap JSON. Only a malformed top level is an error; bad
/// individual entries are skipped and reported.
pub fn parse_bootstrap(json: &str) -> BoardResult<BootstrapLoad> {
    let raw: RawBootstrap = serde_json::from_str(json)?;
    let mut skipped = Vec::new();

    let bootstrap = Bootstrap {
        projects: parse_entries("project", raw.projects, &mut skipped),
        tasks: parse_entries("task", raw.tasks, &mut skipped),
        employees: parse_entries("employee", raw.employees, &mut skipped),
        socket_url: raw.socket_url,
        page: raw.page,
        project_id: raw.project_id,
    };

    Ok(BootstrapLoad { bootstrap, skipped })
}

fn read_global_json() -> BoardResult<String> {
    let window = web_sys::window().ok_or_else(|| BoardError::bootstrap("no window"))?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(BOOTSTRAP_GLOBAL))
        .map_err(|e| BoardError::bootstrap(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Err(BoardError::bootstrap(format!("window.{} is not set", BOOTSTRAP_GLOBAL)));
    }
    js_sys::JSON::stringify(&value)
        .map_err(|e| BoardError::bootstrap(format!("{:?}", e)))?
        .as_string()
        .ok_or_else(|| BoardError::bootstrap("bootstrap data is not serialisable"))
}

/// Load bootstrap data from the page, falling back to an empty board.
pub fn load_bootstrap() -> Bootstrap {
    match read_global_json().and_then(|json| parse_bootstrap(&json)) {
        Ok(load) => {
            for message in &load.skipped {
                web_sys::console::error_1(&message.into());
            }
            web_sys::console::log_1(
                &format!(
                    "Loaded {} projects, {} tasks, {} employees",
                    load.bootstrap.projects.len(),
                    load.bootstrap.tasks.len(),
                    load.bootstrap.employees.len()
                )
                .into(),
            );
            load.bootstrap
        }
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to load bootstrap data: {}", e).into());
            Bootstrap::default()
        }
    }
}
