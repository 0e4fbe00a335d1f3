//! Test data fixtures for the mock server.
//!
//! Bodies mirror the shape of the Zanox JSON API closely enough for
//! client-side tests; the client itself never interprets them.

use serde_json::{json, Value};

/// Connect ID accepted by the default scenario.
pub const CONNECT_ID: &str = "43EEF0445509C7205827";

/// Secret key matching [`CONNECT_ID`].
pub const SECRET_KEY: &str = "9a6f1C2b3d4E5f60718293a4b5C6d7e8f9012345";

/// Day served by the default leads and sales fixtures.
pub const REPORT_DATE: &str = "2024-01-15";

/// Collection of fixture factories for test data.
pub struct Fixtures;

/// Default scenario with every resource populated.
pub struct DefaultScenario {
    /// Registered (connect ID, secret key) pairs.
    pub credentials: Vec<(String, String)>,
    /// (resource path, JSON body) pairs.
    pub resources: Vec<(String, Value)>,
}

impl Fixtures {
    // =========================================================================
    // Account Fixtures
    // =========================================================================

    /// A publisher profile.
    pub fn profile(login_name: &str) -> Value {
        json!({
            "profileItem": [{
                "@id": "1919",
                "loginName": login_name,
                "userName": "Publisher Test",
                "firstName": "Ana",
                "lastName": "Silva",
                "country": "BR",
                "email": "publisher@example.com",
                "currency": "EUR",
                "isAdvertiser": false,
                "isSublogin": false
            }]
        })
    }

    /// A page of ad spaces.
    pub fn adspaces(names: &[&str]) -> Value {
        let items: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "@id": (1000 + i).to_string(),
                    "name": name,
                    "url": format!("https://{name}.example.com"),
                    "adspaceType": "website",
                    "visitors": 5000,
                    "impressions": 20000
                })
            })
            .collect();
        Self::page("adspaceItems", "adspaceItem", items)
    }

    /// Balances per currency.
    pub fn balances() -> Value {
        Self::page(
            "balanceItems",
            "balanceItem",
            vec![json!({"currency": "EUR", "amount": 152.37})],
        )
    }

    // =========================================================================
    // Catalog Fixtures
    // =========================================================================

    /// A page of programs.
    pub fn programs(names: &[&str]) -> Value {
        let items: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "@id": (4000 + i).to_string(),
                    "name": name,
                    "adrank": 6.5,
                    "regions": {"region": ["DE", "BR"]},
                    "currency": "EUR",
                    "status": "active"
                })
            })
            .collect();
        Self::page("programItems", "programItem", items)
    }

    /// A page of products.
    pub fn products(names: &[&str]) -> Value {
        let items: Vec<Value> = names
            .iter()
            .enumerate()
            .map(|(i, name)| {
                json!({
                    "@id": format!("p{i}"),
                    "name": name,
                    "price": 19.99,
                    "currency": "EUR",
                    "program": {"@id": "4000", "$": "Example Shop"}
                })
            })
            .collect();
        Self::page("productItems", "productItem", items)
    }

    // =========================================================================
    // Report Fixtures
    // =========================================================================

    /// Sales or leads for one day.
    pub fn transactions(kind: &str, count: usize) -> Value {
        let items: Vec<Value> = (0..count)
            .map(|i| {
                json!({
                    "@id": format!("{kind}-{i}"),
                    "reviewState": "open",
                    "trackingDate": format!("{REPORT_DATE}T10:00:00+01:00"),
                    "amount": 49.9,
                    "commission": 4.99,
                    "currency": "EUR"
                })
            })
            .collect();
        Self::page(&format!("{kind}Items"), &format!("{kind}Item"), items)
    }

    /// An empty page for resources nobody populated.
    pub fn empty_page() -> Value {
        json!({"page": 0, "items": 0, "total": 0})
    }

    fn page(container: &str, item: &str, items: Vec<Value>) -> Value {
        let total = items.len();
        let mut body = json!({"page": 0, "items": total, "total": total});
        let mut inner = serde_json::Map::new();
        inner.insert(item.to_string(), Value::Array(items));
        body[container] = Value::Object(inner);
        body
    }

    /// The default scenario served by `MockServer::start`.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            credentials: vec![(CONNECT_ID.to_string(), SECRET_KEY.to_string())],
            resources: vec![
                ("/profiles".to_string(), Self::profile("publisher")),
                (
                    "/adspaces".to_string(),
                    Self::adspaces(&["blog", "coupons"]),
                ),
                ("/admedia".to_string(), Self::empty_page()),
                ("/incentives".to_string(), Self::empty_page()),
                (
                    "/products".to_string(),
                    Self::products(&["Running Shoe", "Trail Shoe"]),
                ),
                (
                    "/programs".to_string(),
                    Self::programs(&["Example Shop", "Travel Deals"]),
                ),
                ("/programapplications".to_string(), Self::empty_page()),
                ("/payments/balances".to_string(), Self::balances()),
                ("/reports/basic".to_string(), Self::empty_page()),
                (
                    format!("/reports/leads/date/{REPORT_DATE}"),
                    Self::transactions("lead", 1),
                ),
                (
                    format!("/reports/sales/date/{REPORT_DATE}"),
                    Self::transactions("sale", 2),
                ),
            ],
        }
    }
}
