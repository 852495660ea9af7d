//! Built-in catalog of illustratable products

use crate::request::{
    ClientInfo, DisplayOptions, DividendScale, IllustrationAssumptions, IllustrationRequest,
    PaymentDuration, PremiumMode, ProductType,
};
use serde::{Deserialize, Serialize};

/// A product the advisor can illustrate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSpec {
    pub id: String,
    pub name: String,
    pub product_type: ProductType,
    pub min_issue_age: u8,
    pub max_issue_age: u8,
    pub min_coverage: f64,
    pub max_coverage: f64,
    /// Illustrated current crediting rate, in percent
    pub current_rate: f64,
    /// Guaranteed crediting rate, in percent
    pub guaranteed_rate: f64,
    pub expense_charges: f64,
    pub payment_duration: PaymentDuration,
    pub mortality_table: String,
}

impl ProductSpec {
    fn new(
        id: &str,
        name: &str,
        product_type: ProductType,
        issue_ages: (u8, u8),
        coverage: (f64, f64),
        rates: (f64, f64),
        payment_duration: PaymentDuration,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            product_type,
            min_issue_age: issue_ages.0,
            max_issue_age: issue_ages.1,
            min_coverage: coverage.0,
            max_coverage: coverage.1,
            current_rate: rates.0,
            guaranteed_rate: rates.1,
            expense_charges: if product_type.accumulates_cash_value() { 2.5 } else { 0.0 },
            payment_duration,
            mortality_table: "2017 CSO".to_string(),
        }
    }

    /// Check whether an issue age and face amount fall within the product's limits
    pub fn is_available(&self, issue_age: u8, coverage: f64) -> bool {
        (self.min_issue_age..=self.max_issue_age).contains(&issue_age)
            && coverage >= self.min_coverage
            && coverage <= self.max_coverage
    }

    /// Illustration assumptions seeded from the product's rates
    pub fn default_assumptions(&self) -> IllustrationAssumptions {
        IllustrationAssumptions {
            current_interest_rate: self.current_rate,
            guaranteed_interest_rate: self.guaranteed_rate,
            dividend_scale: if self.product_type.is_whole_life() {
                DividendScale::Current
            } else {
                DividendScale::Zero
            },
            expense_charges: self.expense_charges,
            mortality_table: self.mortality_table.clone(),
        }
    }

    /// Build an annual-mode request for this product with default assumptions
    pub fn request_for(
        &self,
        client_info: ClientInfo,
        coverage_amount: f64,
        premium_amount: f64,
        illustration_end_age: u8,
    ) -> IllustrationRequest {
        IllustrationRequest {
            client_info,
            product_id: self.id.clone(),
            product_name: self.name.clone(),
            product_type: self.product_type,
            coverage_amount,
            premium_amount,
            premium_mode: PremiumMode::Annual,
            payment_duration: self.payment_duration,
            illustration_end_age,
            assumptions: self.default_assumptions(),
            options: DisplayOptions {
                include_dividends: self.product_type.is_whole_life(),
                ..DisplayOptions::default()
            },
        }
    }
}

/// Products available for illustration
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    products: Vec<ProductSpec>,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self {
            products: vec![
                ProductSpec::new(
                    "term-20",
                    "Guardian Term 20",
                    ProductType::TermLife,
                    (18, 65),
                    (100_000.0, 10_000_000.0),
                    (0.0, 0.0),
                    PaymentDuration::Years(20),
                ),
                ProductSpec::new(
                    "wl-100",
                    "Heritage Whole Life 100",
                    ProductType::WholeLife,
                    (18, 85),
                    (25_000.0, 5_000_000.0),
                    (6.5, 4.0),
                    PaymentDuration::Life,
                ),
                ProductSpec::new(
                    "ul-flex",
                    "FlexLife Universal Life",
                    ProductType::UniversalLife,
                    (18, 80),
                    (50_000.0, 5_000_000.0),
                    (5.5, 3.0),
                    PaymentDuration::ToAge(65),
                ),
                ProductSpec::new(
                    "vul-growth",
                    "Growth Variable Universal Life",
                    ProductType::VariableUniversalLife,
                    (18, 75),
                    (100_000.0, 10_000_000.0),
                    (7.0, 2.0),
                    PaymentDuration::ToAge(65),
                ),
                ProductSpec::new(
                    "iul-summit",
                    "Summit Indexed Universal Life",
                    ProductType::IndexedUniversalLife,
                    (18, 80),
                    (50_000.0, 10_000_000.0),
                    (6.0, 1.0),
                    PaymentDuration::Years(20),
                ),
            ],
        }
    }
}

impl ProductCatalog {
    /// Look up a product by id
    pub fn get(&self, id: &str) -> Option<&ProductSpec> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[ProductSpec] {
        &self.products
    }
}
