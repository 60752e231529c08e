//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, grouped by entity.
//! Pages talk to the backend through [`CommandClient`] so the CRUD
//! workflows can run against an in-memory client in tests.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::models::{NewProductOrder, NewProject, ProductOrder, Project};

mod product_order;
mod project;

pub use product_order::*;
pub use project::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

/// Invoke a command whose result is `()`
async fn invoke_unit<A: Serialize + ?Sized>(cmd: &str, args: &A) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    invoke(cmd, js_args).await.map_err(|e| rejection(cmd, e))?;
    Ok(())
}

/// Invoke an argument-less command and decode its result
async fn invoke_list<T: DeserializeOwned>(cmd: &str) -> Result<T, String> {
    let result = invoke(cmd, JsValue::NULL).await.map_err(|e| rejection(cmd, e))?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Backend commands reject with their error string
fn rejection(cmd: &str, err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| format!("{} failed: {:?}", cmd, err))
}

#[derive(Serialize)]
pub struct IdArgs {
    pub id: u32,
}

/// The backend operations the pages depend on
#[async_trait(?Send)]
pub trait CommandClient {
    async fn add_product_order(&self, order: &NewProductOrder) -> Result<(), String>;
    async fn get_product_orders(&self) -> Result<Vec<ProductOrder>, String>;
    async fn update_product_order(&self, order: &ProductOrder) -> Result<(), String>;
    async fn delete_product_order(&self, id: u32) -> Result<(), String>;

    async fn add_project(&self, project: &NewProject) -> Result<(), String>;
    async fn get_projects(&self) -> Result<Vec<Project>, String>;
    async fn update_project(&self, project: &Project) -> Result<(), String>;
    async fn delete_project(&self, id: u32) -> Result<(), String>;
}

/// Client backed by the Tauri IPC bridge
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriClient;

#[async_trait(?Send)]
impl CommandClient for TauriClient {
    async fn add_product_order(&self, order: &NewProductOrder) -> Result<(), String> {
        product_order::add_product_order(order).await
    }

    async fn get_product_orders(&self) -> Result<Vec<ProductOrder>, String> {
        product_order::get_product_orders().await
    }

    async fn update_product_order(&self, order: &ProductOrder) -> Result<(), String> {
        product_order::update_product_order(order).await
    }

    async fn delete_product_order(&self, id: u32) -> Result<(), String> {
        product_order::delete_product_order(id).await
    }

    async fn add_project(&self, project: &NewProject) -> Result<(), String> {
        project::add_project(project).await
    }

    async fn get_projects(&self) -> Result<Vec<Project>, String> {
        project::get_projects().await
    }

    async fn update_project(&self, project: &Project) -> Result<(), String> {
        project::update_project(project).await
    }

    async fn delete_project(&self, id: u32) -> Result<(), String> {
        project::delete_project(id).await
    }
}
