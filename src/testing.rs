//! In-memory command client for workflow tests

use std::cell::{Cell, Ref, RefCell};

use async_trait::async_trait;

use crate::commands::CommandClient;
use crate::crud::{load, RecordCache, Refetch};
use crate::models::{NewProductOrder, NewProject, ProductOrder, Project};
use crate::record::Record;

/// A backend call as the mock saw it
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    AddProductOrder(NewProductOrder),
    GetProductOrders,
    UpdateProductOrder(ProductOrder),
    DeleteProductOrder(u32),
    AddProject(NewProject),
    GetProjects,
    UpdateProject(Project),
    DeleteProject(u32),
}

#[derive(Default)]
pub struct MockClient {
    calls: RefCell<Vec<Call>>,
    orders: RefCell<Vec<ProductOrder>>,
    projects: RefCell<Vec<Project>>,
    last_id: Cell<u32>,
    fail_lists: Cell<bool>,
    fail_mutations: Cell<bool>,
}

pub fn order(id: u32, purchaser: &str) -> ProductOrder {
    ProductOrder {
        id,
        order_number: 100 + id,
        purchaser: purchaser.to_string(),
        item: "Bolts".to_string(),
        quantity: 2,
        date_of_order: "2024-02-03".to_string(),
    }
}

impl MockClient {
    pub fn with_orders(orders: Vec<ProductOrder>) -> Self {
        let last_id = orders.iter().map(|o| o.id).max().unwrap_or(0);
        Self {
            orders: RefCell::new(orders),
            last_id: Cell::new(last_id),
            ..Self::default()
        }
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        let last_id = projects.iter().map(|p| p.id).max().unwrap_or(0);
        Self {
            projects: RefCell::new(projects),
            last_id: Cell::new(last_id),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn fail_lists(&self) {
        self.fail_lists.set(true);
    }

    pub fn fail_mutations(&self) {
        self.fail_mutations.set(true);
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn mutation(&self, call: Call) -> Result<(), String> {
        self.record(call);
        if self.fail_mutations.get() {
            Err("Database error".to_string())
        } else {
            Ok(())
        }
    }

    fn listing(&self, call: Call) -> Result<(), String> {
        self.record(call);
        if self.fail_lists.get() {
            Err("Database error".to_string())
        } else {
            Ok(())
        }
    }

    fn next_id(&self) -> u32 {
        self.last_id.set(self.last_id.get() + 1);
        self.last_id.get()
    }
}

#[async_trait(?Send)]
impl CommandClient for MockClient {
    async fn add_product_order(&self, new: &NewProductOrder) -> Result<(), String> {
        self.mutation(Call::AddProductOrder(new.clone()))?;
        let id = self.next_id();
        self.orders.borrow_mut().push(ProductOrder {
            id,
            order_number: new.order_number,
            purchaser: new.purchaser.clone(),
            item: new.item.clone(),
            quantity: new.quantity,
            date_of_order: new.date_of_order.clone(),
        });
        Ok(())
    }

    async fn get_product_orders(&self) -> Result<Vec<ProductOrder>, String> {
        self.listing(Call::GetProductOrders)?;
        Ok(self.orders.borrow().clone())
    }

    async fn update_product_order(&self, order: &ProductOrder) -> Result<(), String> {
        self.mutation(Call::UpdateProductOrder(order.clone()))?;
        if let Some(existing) = self.orders.borrow_mut().iter_mut().find(|o| o.id == order.id) {
            *existing = order.clone();
        }
        Ok(())
    }

    async fn delete_product_order(&self, id: u32) -> Result<(), String> {
        self.mutation(Call::DeleteProductOrder(id))?;
        self.orders.borrow_mut().retain(|o| o.id != id);
        Ok(())
    }

    async fn add_project(&self, new: &NewProject) -> Result<(), String> {
        self.mutation(Call::AddProject(new.clone()))?;
        let id = self.next_id();
        self.projects.borrow_mut().push(Project { id, project_number: new.project_number });
        Ok(())
    }

    async fn get_projects(&self) -> Result<Vec<Project>, String> {
        self.listing(Call::GetProjects)?;
        Ok(self.projects.borrow().clone())
    }

    async fn update_project(&self, project: &Project) -> Result<(), String> {
        self.mutation(Call::UpdateProject(project.clone()))?;
        if let Some(existing) = self.projects.borrow_mut().iter_mut().find(|p| p.id == project.id) {
            *existing = project.clone();
        }
        Ok(())
    }

    async fn delete_project(&self, id: u32) -> Result<(), String> {
        self.mutation(Call::DeleteProject(id))?;
        self.projects.borrow_mut().retain(|p| p.id != id);
        Ok(())
    }
}

/// A page cache that refetches through the mock
pub struct TestPage<'a, T> {
    client: &'a MockClient,
    cache: RefCell<RecordCache<T>>,
}

impl<'a, T: Record> TestPage<'a, T> {
    pub fn new(client: &'a MockClient) -> Self {
        Self { client, cache: RefCell::new(RecordCache::default()) }
    }

    pub fn cache(&self) -> Ref<'_, RecordCache<T>> {
        self.cache.borrow()
    }
}

#[async_trait(?Send)]
impl<'a, T: Record> Refetch for TestPage<'a, T> {
    async fn refetch(&self) {
        let fetched = load::<T>(self.client).await;
        self.cache.borrow_mut().apply_fetch(fetched);
    }
}
