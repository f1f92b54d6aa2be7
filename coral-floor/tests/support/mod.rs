// coral-floor/tests/support/mod.rs
// 内存版餐厅 API，供控制器集成测试使用

#![allow(dead_code)]

use async_trait::async_trait;
use coral_client::{ClientError, ClientResult, OrderQuery, PosApi};
use shared::models::{
    BulkTransition, Category, DiningTable, MessageResponse, NewOrderLine, OptionName, OptionSet,
    OrderLine, OrderStatus, PrintOrderRequest, Product, ProductOption, TableLocation, TableNumber,
};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

#[derive(Debug, Clone)]
pub struct StoredLine {
    pub line: OrderLine,
    pub status: OrderStatus,
}

#[derive(Default)]
struct Data {
    tables: Vec<DiningTable>,
    categories: Vec<Category>,
    products: Vec<Product>,
    options: Vec<ProductOption>,
    lines: Vec<StoredLine>,
    next_id: i64,
    created: Vec<NewOrderLine>,
    printed: Vec<PrintOrderRequest>,
    transitions: Vec<(BulkTransition, TableNumber)>,
    calls: Vec<String>,
    failing: HashSet<&'static str>,
    gates: HashMap<TableNumber, Arc<Notify>>,
}

/// In-memory restaurant API
#[derive(Clone, Default)]
pub struct FakePosApi {
    data: Arc<Mutex<Data>>,
}

pub fn table(id: i64, number: i64, location: TableLocation) -> DiningTable {
    DiningTable {
        id,
        location,
        table_number: TableNumber::from(number),
        ta_number: None,
        width_percentage: 10.0,
        height_percentage: 10.0,
        x_position_percentage: id as f64 * 12.0,
        y_position_percentage: 10.0,
    }
}

impl FakePosApi {
    /// Two inside tables (5, 6), one outside (7), a small menu
    pub fn seeded() -> Self {
        let fake = Self::default();
        {
            let mut data = fake.data.lock().unwrap();
            data.next_id = 100;
            data.tables = vec![
                table(1, 5, TableLocation::Inside),
                table(2, 6, TableLocation::Inside),
                table(3, 7, TableLocation::Outside),
            ];
            data.categories = vec![
                Category { id: 1, name: "Mains".into(), category_number: 3 },
                Category { id: 2, name: "Drinks".into(), category_number: 4 },
            ];
            data.products = vec![
                Product {
                    product_number: 7,
                    name: "Burger".into(),
                    category_number: 3,
                    option_group_number: Some(1),
                },
                Product {
                    product_number: 8,
                    name: "Soda".into(),
                    category_number: 4,
                    option_group_number: None,
                },
                Product {
                    product_number: 9,
                    name: "Fries".into(),
                    category_number: 3,
                    option_group_number: None,
                },
            ];
            data.options = vec![
                ProductOption { id: 1, details: "Extra cheese".into(), option_group_number: Some(1), option_number: Some(10) },
                ProductOption { id: 2, details: "No onions".into(), option_group_number: Some(1), option_number: Some(11) },
                ProductOption { id: 4, details: "Well done".into(), option_group_number: Some(1), option_number: Some(12) },
            ];
        }
        fake
    }

    /// Add a line directly, bypassing the API
    pub fn insert_line(
        &self,
        id: i64,
        table: i64,
        product: &str,
        options: &str,
        status: OrderStatus,
    ) {
        let mut data = self.data.lock().unwrap();
        data.lines.push(StoredLine {
            line: OrderLine {
                id,
                timestamp: Some("2024-03-01 19:45:12".into()),
                table_number: TableNumber::from(table),
                product_number: id,
                product_name: Some(product.into()),
                option_number: OptionSet::parse(options).unwrap(),
                option_details: None,
                option_text: None,
            },
            status,
        });
    }

    pub fn fail(&self, endpoint: &'static str) {
        self.data.lock().unwrap().failing.insert(endpoint);
    }

    /// Hold `GET /orders` for `table` until the returned handle is notified
    pub fn gate_orders(&self, table: i64) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        self.data
            .lock()
            .unwrap()
            .gates
            .insert(TableNumber::from(table), notify.clone());
        notify
    }

    pub fn calls(&self) -> Vec<String> {
        self.data.lock().unwrap().calls.clone()
    }

    pub fn created(&self) -> Vec<NewOrderLine> {
        self.data.lock().unwrap().created.clone()
    }

    pub fn printed(&self) -> Vec<PrintOrderRequest> {
        self.data.lock().unwrap().printed.clone()
    }

    pub fn transitions(&self) -> Vec<(BulkTransition, TableNumber)> {
        self.data.lock().unwrap().transitions.clone()
    }

    pub fn status_of(&self, id: i64) -> Option<OrderStatus> {
        self.data
            .lock()
            .unwrap()
            .lines
            .iter()
            .find(|l| l.line.id == id)
            .map(|l| l.status)
    }

    fn enter(&self, endpoint: &'static str, call: String) -> ClientResult<()> {
        let mut data = self.data.lock().unwrap();
        data.calls.push(call);
        if data.failing.contains(endpoint) {
            return Err(ClientError::Server {
                status: 500,
                message: format!(r#"{{"error": "{} failed"}}"#, endpoint),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl PosApi for FakePosApi {
    async fn tables(&self) -> ClientResult<Vec<DiningTable>> {
        self.enter("tables", "GET /tables".into())?;
        Ok(self.data.lock().unwrap().tables.clone())
    }

    async fn reference_products(&self) -> ClientResult<Vec<Product>> {
        self.enter("reference_products", "GET /products".into())?;
        Ok(self.data.lock().unwrap().products.clone())
    }

    async fn categories(&self) -> ClientResult<Vec<Category>> {
        self.enter("categories", "GET /categories".into())?;
        Ok(self.data.lock().unwrap().categories.clone())
    }

    async fn products(&self, category_number: i64) -> ClientResult<Vec<Product>> {
        self.enter("products", format!("GET /products?category_number={}", category_number))?;
        Ok(self
            .data
            .lock()
            .unwrap()
            .products
            .iter()
            .filter(|p| p.category_number == category_number)
            .cloned()
            .collect())
    }

    async fn product_options(&self, option_group_number: i64) -> ClientResult<Vec<ProductOption>> {
        self.enter(
            "product_options",
            format!("GET /product_options?option_group_number={}", option_group_number),
        )?;
        Ok(self
            .data
            .lock()
            .unwrap()
            .options
            .iter()
            .filter(|o| o.option_group_number == Some(option_group_number))
            .cloned()
            .collect())
    }

    async fn option_names(&self, ids: &[i64]) -> ClientResult<Vec<OptionName>> {
        let joined = ids.iter().map(|i| i.to_string()).collect::<Vec<_>>().join(",");
        self.enter("option_names", format!("GET /options?ids={}", joined))?;
        Ok(self
            .data
            .lock()
            .unwrap()
            .options
            .iter()
            .filter(|o| ids.contains(&o.id))
            .map(|o| OptionName { id: o.id, option_details: o.details.clone() })
            .collect())
    }

    async fn orders(&self, query: &OrderQuery) -> ClientResult<Vec<OrderLine>> {
        let table = query
            .table_number
            .as_ref()
            .map(|t| t.to_string())
            .unwrap_or_default();
        self.enter(
            "orders",
            format!("GET /orders?table_number={}&status={}", table, query.status),
        )?;

        let gate = query
            .table_number
            .as_ref()
            .and_then(|t| self.data.lock().unwrap().gates.remove(t));
        if let Some(gate) = gate {
            gate.notified().await;
        }

        Ok(self
            .data
            .lock()
            .unwrap()
            .lines
            .iter()
            .filter(|l| l.status == query.status)
            .filter(|l| {
                query
                    .table_number
                    .as_ref()
                    .is_none_or(|t| &l.line.table_number == t)
            })
            .map(|l| l.line.clone())
            .collect())
    }

    async fn create_order(&self, order: &NewOrderLine) -> ClientResult<MessageResponse> {
        self.enter("create_order", "POST /orders".into())?;
        let mut data = self.data.lock().unwrap();
        data.next_id += 1;
        let id = data.next_id;
        let name = data
            .products
            .iter()
            .find(|p| p.product_number == order.product_number)
            .map(|p| p.name.clone());
        data.created.push(order.clone());
        data.lines.push(StoredLine {
            line: OrderLine {
                id,
                timestamp: None,
                table_number: order.table_number.clone(),
                product_number: order.product_number,
                product_name: name,
                option_number: OptionSet::parse(&order.option_number).unwrap_or_default(),
                option_details: None,
                option_text: Some(order.option_text.clone()),
            },
            status: order.status,
        });
        Ok(MessageResponse { message: Some("Order created".into()), error: None })
    }

    async fn remove_order(&self, order_id: i64) -> ClientResult<MessageResponse> {
        self.enter("remove_order", format!("POST /remove_order/{}", order_id))?;
        self.set_status(order_id, OrderStatus::Deleted)
    }

    async fn discard_order(&self, order_id: i64) -> ClientResult<MessageResponse> {
        self.enter("discard_order", format!("POST /discard_order/{}", order_id))?;
        self.set_status(order_id, OrderStatus::Discarded)
    }

    async fn bulk_transition(
        &self,
        transition: BulkTransition,
        table_number: &TableNumber,
    ) -> ClientResult<()> {
        self.enter(
            transition.endpoint(),
            format!("POST /{}?table_number={}", transition.endpoint(), table_number),
        )?;
        let mut data = self.data.lock().unwrap();
        data.transitions.push((transition, table_number.clone()));
        let target = transition.target_status();
        for stored in data.lines.iter_mut().filter(|l| &l.line.table_number == table_number) {
            let applies = match transition {
                BulkTransition::Promote => stored.status == OrderStatus::Pending,
                BulkTransition::Close => stored.status == OrderStatus::Open,
                BulkTransition::Discard => !stored.status.is_terminal(),
            };
            if applies {
                stored.status = target;
            }
        }
        Ok(())
    }

    async fn print_order(&self, request: &PrintOrderRequest) -> ClientResult<MessageResponse> {
        self.enter("print_order", "POST /print_order".into())?;
        self.data.lock().unwrap().printed.push(request.clone());
        Ok(MessageResponse { message: Some("Printed".into()), error: None })
    }
}

impl FakePosApi {
    fn set_status(&self, order_id: i64, status: OrderStatus) -> ClientResult<MessageResponse> {
        let mut data = self.data.lock().unwrap();
        match data.lines.iter_mut().find(|l| l.line.id == order_id) {
            Some(stored) if !stored.status.is_terminal() => {
                stored.status = status;
                Ok(MessageResponse { message: Some("OK".into()), error: None })
            }
            _ => Err(ClientError::NotFound(r#"{"error": "Order not found"}"#.into())),
        }
    }
}
