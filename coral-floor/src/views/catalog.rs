//! Catalog Browser view: categories, products, options

use serde::Serialize;
use shared::models::{Category, Product, ProductOption};

/// Title of the product step
pub const PRODUCT_STEP_TITLE: &str = "Choose meal";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryButton {
    pub category_number: i64,
    pub name: String,
}

impl From<&Category> for CategoryButton {
    fn from(c: &Category) -> Self {
        Self {
            category_number: c.category_number,
            name: c.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductButton {
    pub product_number: i64,
    pub name: String,
    pub category_number: i64,
    pub option_group_number: Option<i64>,
}

impl From<&Product> for ProductButton {
    fn from(p: &Product) -> Self {
        Self {
            product_number: p.product_number,
            name: p.name.clone(),
            category_number: p.category_number,
            option_group_number: p.option_group_number,
        }
    }
}

impl ProductButton {
    pub fn to_product(&self) -> Product {
        Product {
            product_number: self.product_number,
            name: self.name.clone(),
            category_number: self.category_number,
            option_group_number: self.option_group_number,
        }
    }
}

/// Toggle button for one option
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionButton {
    pub id: i64,
    pub label: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CatalogView {
    pub categories: Vec<CategoryButton>,
    pub products_title: String,
    pub products: Vec<ProductButton>,
    pub options: Vec<OptionButton>,
    /// Free-text comment field of the option step
    pub comment: String,
}

impl CatalogView {
    pub fn set_categories(&mut self, categories: &[Category]) {
        self.categories = categories.iter().map(CategoryButton::from).collect();
    }

    pub fn set_products(&mut self, products: &[Product]) {
        self.products = products.iter().map(ProductButton::from).collect();
    }

    /// Replace option buttons, all unselected
    pub fn set_options(&mut self, options: &[ProductOption]) {
        self.options = options
            .iter()
            .map(|o| OptionButton {
                id: o.id,
                label: o.details.clone(),
                selected: false,
            })
            .collect();
    }

    pub fn product(&self, product_number: i64) -> Option<&ProductButton> {
        self.products
            .iter()
            .find(|p| p.product_number == product_number)
    }

    pub fn set_option_selected(&mut self, id: i64, selected: bool) {
        for button in self.options.iter_mut().filter(|b| b.id == id) {
            button.selected = selected;
        }
    }

    /// Clear every option button's selected flag
    pub fn clear_option_selection(&mut self) {
        for button in &mut self.options {
            button.selected = false;
        }
    }
}
