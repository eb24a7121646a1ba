//! Graph-shaped requests and responses.
//!
//! A [`GraphRequest`] is an ordered list of aliased root fields, all queries or all
//! mutations. [`Gateway::execute`] resolves it into a [`GraphResponse`] whose JSON form
//! follows the GraphQL response layout:
//!
//! ```json
//! {
//!   "data": { "me": [ { "id": "...", "name": "...", "orders": null } ] },
//!   "errors": [
//!     { "message": "...", "path": ["me", 0, "orders"], "extensions": { "code": "TIMEOUT" } }
//!   ]
//! }
//! ```
//!
//! A failing field is `null` in `data` and has an entry in `errors`; its siblings are
//! unaffected.

use super::schema::{AccountArgs, AccountInput, OrderInput, ProductArgs, ProductInput};
use super::{Gateway, GatewayError};
use crate::error::ErrorKind;
use futures::future::join_all;
use serde::Serialize;
use serde_json::{json, Map, Value};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub enum QueryField {
    /// `accounts`, optionally with each account's `orders`.
    Accounts { args: AccountArgs, with_orders: bool },
    Products(ProductArgs),
}

#[derive(Debug, Clone)]
pub enum MutationField {
    CreateAccount(AccountInput),
    CreateProduct(ProductInput),
    CreateOrder(OrderInput),
}

#[derive(Debug, Clone)]
pub struct Selection<F> {
    pub alias: String,
    pub field: F,
}

#[derive(Debug, Clone)]
pub enum GraphRequest {
    /// Independent fields, resolved concurrently.
    Query(Vec<Selection<QueryField>>),
    /// Resolved one after another in request order.
    Mutation(Vec<Selection<MutationField>>),
}

impl GraphRequest {
    pub fn query() -> Self {
        Self::Query(Vec::new())
    }

    pub fn mutation() -> Self {
        Self::Mutation(Vec::new())
    }

    /// Adds a query field. Ignored on a mutation request.
    pub fn with_query(mut self, alias: impl Into<String>, field: QueryField) -> Self {
        if let Self::Query(fields) = &mut self {
            fields.push(Selection {
                alias: alias.into(),
                field,
            });
        }
        self
    }

    /// Adds a mutation field. Ignored on a query request.
    pub fn with_mutation(mut self, alias: impl Into<String>, field: MutationField) -> Self {
        if let Self::Mutation(fields) = &mut self {
            fields.push(Selection {
                alias: alias.into(),
                field,
            });
        }
        self
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Query(fields) => fields.len(),
            Self::Mutation(fields) => fields.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Field(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(field: &str) -> Self {
        Self::Field(field.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorExtensions {
    pub code: ErrorKind,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub message: String,
    pub path: Vec<PathSegment>,
    pub extensions: ErrorExtensions,
}

impl FieldError {
    fn new(error: &GatewayError, path: Vec<PathSegment>) -> Self {
        Self {
            message: error.to_string(),
            path,
            extensions: ErrorExtensions { code: error.kind() },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.extensions.code
    }
}

#[derive(Debug, Clone, Default)]
pub struct GraphResponse {
    data: Map<String, Value>,
    errors: Vec<FieldError>,
}

impl GraphResponse {
    pub fn data(&self, alias: &str) -> Option<&Value> {
        self.data.get(alias)
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// First error whose path starts at `alias`.
    pub fn error_for(&self, alias: &str) -> Option<&FieldError> {
        self.errors
            .iter()
            .find(|e| matches!(e.path.first(), Some(PathSegment::Field(f)) if f == alias))
    }

    /// The response document. `errors` is omitted when empty.
    pub fn to_json(&self) -> Value {
        let mut document = json!({ "data": self.data });
        if !self.errors.is_empty() {
            document["errors"] = json!(self.errors);
        }
        document
    }

    fn insert(&mut self, alias: String, resolved: Resolved) {
        self.data.insert(alias, resolved.value);
        self.errors.extend(resolved.errors);
    }
}

/// One root field's value plus any errors raised inside it.
struct Resolved {
    value: Value,
    errors: Vec<FieldError>,
}

impl Resolved {
    fn ok(value: Value) -> Self {
        Self {
            value,
            errors: Vec::new(),
        }
    }

    fn failed(alias: &str, error: &GatewayError) -> Self {
        Self {
            value: Value::Null,
            errors: vec![FieldError::new(error, vec![alias.into()])],
        }
    }

    fn from_result<T: Serialize>(alias: &str, result: Result<T, GatewayError>) -> Self {
        match result {
            Ok(value) => Self::ok(render(&value)),
            Err(e) => Self::failed(alias, &e),
        }
    }
}

fn render<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

impl Gateway {
    /// Resolves every field of `request`. Never fails as a whole: field failures are
    /// reported in the response's `errors`.
    #[instrument(skip_all, fields(fields = request.len()))]
    pub async fn execute(&self, request: GraphRequest) -> GraphResponse {
        let mut response = GraphResponse::default();
        match request {
            GraphRequest::Query(fields) => {
                let resolved = join_all(fields.into_iter().map(|selection| async move {
                    let value = self.resolve_query(&selection.alias, selection.field).await;
                    (selection.alias, value)
                }))
                .await;
                for (alias, value) in resolved {
                    response.insert(alias, value);
                }
            }
            GraphRequest::Mutation(fields) => {
                for selection in fields {
                    let value = self.resolve_mutation(&selection.alias, selection.field).await;
                    response.insert(selection.alias, value);
                }
            }
        }
        info!(errors = response.errors.len(), "Request resolved");
        response
    }

    async fn resolve_query(&self, alias: &str, field: QueryField) -> Resolved {
        match field {
            QueryField::Accounts { args, with_orders } => {
                let accounts = match self.accounts(args).await {
                    Ok(accounts) => accounts,
                    Err(e) => return Resolved::failed(alias, &e),
                };
                if !with_orders {
                    return Resolved::ok(render(&accounts));
                }

                // Each account's orders depend on the account; accounts are independent.
                let orders =
                    join_all(accounts.iter().map(|account| self.account_orders(&account.id))).await;
                let mut errors = Vec::new();
                let nodes = accounts
                    .iter()
                    .zip(orders)
                    .enumerate()
                    .map(|(index, (account, orders))| {
                        let mut node = render(account);
                        let orders = match orders {
                            Ok(orders) => render(&orders),
                            Err(e) => {
                                errors.push(FieldError::new(
                                    &e,
                                    vec![alias.into(), index.into(), "orders".into()],
                                ));
                                Value::Null
                            }
                        };
                        if let Value::Object(map) = &mut node {
                            map.insert("orders".to_string(), orders);
                        }
                        node
                    })
                    .collect();
                Resolved {
                    value: Value::Array(nodes),
                    errors,
                }
            }
            QueryField::Products(args) => Resolved::from_result(alias, self.products(args).await),
        }
    }

    async fn resolve_mutation(&self, alias: &str, field: MutationField) -> Resolved {
        match field {
            MutationField::CreateAccount(input) => {
                Resolved::from_result(alias, self.create_account(input).await)
            }
            MutationField::CreateProduct(input) => {
                Resolved::from_result(alias, self.create_product(input).await)
            }
            MutationField::CreateOrder(input) => {
                Resolved::from_result(alias, self.create_order(input).await)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_document_has_graphql_shape() {
        let mut response = GraphResponse::default();
        response.insert("ok".into(), Resolved::ok(json!([1])));
        response.insert(
            "bad".into(),
            Resolved::failed("bad", &GatewayError::Timeout),
        );

        let document = response.to_json();
        assert_eq!(document["data"]["ok"], json!([1]));
        assert_eq!(document["data"]["bad"], Value::Null);
        assert_eq!(document["errors"][0]["path"], json!(["bad"]));
        assert_eq!(document["errors"][0]["extensions"]["code"], json!("TIMEOUT"));
        assert_eq!(response.error_for("bad").unwrap().kind(), ErrorKind::Timeout);
        assert!(response.error_for("ok").is_none());
    }

    #[test]
    fn errors_key_is_omitted_without_errors() {
        let mut response = GraphResponse::default();
        response.insert("ok".into(), Resolved::ok(Value::Bool(true)));
        assert!(response.to_json().get("errors").is_none());
    }

    #[test]
    fn nested_paths_mix_fields_and_indices() {
        let error = FieldError::new(
            &GatewayError::InvalidParameter("x".into()),
            vec!["me".into(), 2.into(), "orders".into()],
        );
        assert_eq!(render(&error.path), json!(["me", 2, "orders"]));
        assert_eq!(error.kind(), ErrorKind::InvalidParameter);
    }

    #[test]
    fn builder_ignores_fields_of_the_other_kind() {
        let request = GraphRequest::query()
            .with_query("p", QueryField::Products(ProductArgs::default()))
            .with_mutation(
                "a",
                MutationField::CreateAccount(AccountInput { name: "x".into() }),
            );
        assert_eq!(request.len(), 1);
    }
}
