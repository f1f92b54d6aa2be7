//! Restaurant API surface used by the floor controller

use async_trait::async_trait;
use shared::models::{
    BulkTransition, Category, DiningTable, MessageResponse, NewOrderLine, OptionName, OrderLine,
    OrderStatus, PrintOrderRequest, Product, ProductOption, TableNumber,
};

use crate::ClientResult;

/// Filter for `GET /orders`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderQuery {
    pub table_number: Option<TableNumber>,
    pub status: OrderStatus,
}

impl OrderQuery {
    /// Lines of every table in `status`
    pub fn by_status(status: OrderStatus) -> Self {
        Self { table_number: None, status }
    }

    /// Lines of one table in `status`
    pub fn for_table(table_number: &TableNumber, status: OrderStatus) -> Self {
        Self {
            table_number: Some(table_number.clone()),
            status,
        }
    }

    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(2);
        if let Some(table) = &self.table_number {
            query.push(("table_number", table.to_string()));
        }
        query.push(("status", self.status.to_string()));
        query
    }
}

/// Every endpoint the floor talks to
///
/// Implemented over HTTP by [`crate::HttpClient`]; tests substitute an
/// in-memory implementation.
#[async_trait]
pub trait PosApi: Send + Sync {
    // ========== Reference data ==========

    /// `GET /tables` on the reference host
    async fn tables(&self) -> ClientResult<Vec<DiningTable>>;

    /// `GET /products` on the reference host (full product list)
    async fn reference_products(&self) -> ClientResult<Vec<Product>>;

    // ========== Catalog ==========

    /// `GET /categories`
    async fn categories(&self) -> ClientResult<Vec<Category>>;

    /// `GET /products?category_number=`
    async fn products(&self, category_number: i64) -> ClientResult<Vec<Product>>;

    /// `GET /product_options?option_group_number=`
    async fn product_options(&self, option_group_number: i64) -> ClientResult<Vec<ProductOption>>;

    /// `GET /options?ids=` batch name lookup
    async fn option_names(&self, ids: &[i64]) -> ClientResult<Vec<OptionName>>;

    // ========== Orders ==========

    /// `GET /orders?table_number=&status=`
    async fn orders(&self, query: &OrderQuery) -> ClientResult<Vec<OrderLine>>;

    /// `POST /orders`
    async fn create_order(&self, order: &NewOrderLine) -> ClientResult<MessageResponse>;

    /// `POST /remove_order/{id}`
    async fn remove_order(&self, order_id: i64) -> ClientResult<MessageResponse>;

    /// `POST /discard_order/{id}`
    async fn discard_order(&self, order_id: i64) -> ClientResult<MessageResponse>;

    /// `POST /{close,discard,update}_orders?table_number=`
    async fn bulk_transition(
        &self,
        transition: BulkTransition,
        table_number: &TableNumber,
    ) -> ClientResult<()>;

    /// `POST /print_order`
    async fn print_order(&self, request: &PrintOrderRequest) -> ClientResult<MessageResponse>;
}
