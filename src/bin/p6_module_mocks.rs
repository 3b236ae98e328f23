// Pattern 6: Mocking Modules
// A handler reads the `todos` table through a client and reports through a
// module of free functions. Tests replace both:
// - the client is a trait, so `#[automock]` gives a `MockTodoClient`
// - `responders` is a module, so `#[automock]` gives a `mock_responders` module
//   with the same functions, swapped in under `cfg(test)`
// Free-function mocks live in global state, so those tests run `#[serial]`.

#[cfg(test)]
use mockall::automock;
use thiserror::Error;
use tracing::{debug, error};

pub const TODOS_QUERY: &str = "SELECT * FROM todos;";

#[derive(Debug, Clone, PartialEq)]
pub struct Todo {
    pub id: i64,
    pub title: String,
    pub done: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryResult {
    pub rows: Vec<Todo>,
    pub row_count: usize,
}

#[derive(Error, Debug, Clone, PartialEq)]
#[error("{0}")]
pub struct QueryError(pub String);

#[cfg_attr(test, automock)]
pub trait TodoClient {
    fn connect(&mut self) -> Result<(), QueryError>;
    fn query(&mut self, sql: &str) -> Result<QueryResult, QueryError>;
    fn end(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseBody {
    pub message: String,
    pub data: Vec<Todo>,
    pub status: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub status_code: u16,
    pub body: ResponseBody,
}

#[cfg_attr(test, automock)]
pub mod responders {
    pub fn success(body: super::ResponseBody) -> super::Response {
        super::Response {
            status_code: 200,
            body,
        }
    }

    pub fn failure(body: super::ResponseBody) -> super::Response {
        super::Response {
            status_code: 500,
            body,
        }
    }
}

#[cfg(not(test))]
use responders as respond;
#[cfg(test)]
use mock_responders as respond;

/// Fetch every todo. The client is always closed once connected.
pub fn get_todos<C: TodoClient>(client: &mut C) -> Response {
    if let Err(e) = client.connect() {
        error!(error = %e, "connect failed");
        return respond::failure(ResponseBody {
            message: e.to_string(),
            data: Vec::new(),
            status: false,
        });
    }

    let outcome = client.query(TODOS_QUERY);
    client.end();

    match outcome {
        Ok(result) => {
            debug!(rows = result.row_count, "query succeeded");
            respond::success(ResponseBody {
                message: format!("{} item(s) returned", result.row_count),
                data: result.rows,
                status: true,
            })
        }
        Err(e) => {
            error!(error = %e, "query failed");
            respond::failure(ResponseBody {
                message: e.to_string(),
                data: Vec::new(),
                status: false,
            })
        }
    }
}

/// The client used outside tests: a fixed table held in memory.
pub struct InMemoryTodoClient {
    rows: Vec<Todo>,
    connected: bool,
}

impl InMemoryTodoClient {
    pub fn new(rows: Vec<Todo>) -> Self {
        InMemoryTodoClient {
            rows,
            connected: false,
        }
    }
}

impl TodoClient for InMemoryTodoClient {
    fn connect(&mut self) -> Result<(), QueryError> {
        self.connected = true;
        Ok(())
    }

    fn query(&mut self, sql: &str) -> Result<QueryResult, QueryError> {
        if !self.connected {
            return Err(QueryError("not connected".to_string()));
        }
        if sql != TODOS_QUERY {
            return Err(QueryError(format!("unsupported query: {sql}")));
        }
        Ok(QueryResult {
            rows: self.rows.clone(),
            row_count: self.rows.len(),
        })
    }

    fn end(&mut self) {
        self.connected = false;
    }
}

#[cfg(test)]
mod get_a_list_of_todo_items {
    use super::*;
    use serial_test::serial;

    fn connected_client() -> MockTodoClient {
        let mut client = MockTodoClient::new();
        client.expect_connect().times(1).returning(|| Ok(()));
        client.expect_end().times(1).return_const(());
        client
    }

    #[test]
    #[serial]
    fn should_return_items_successfully() {
        let mut client = connected_client();
        // The query yields an empty result once.
        client
            .expect_query()
            .withf(|sql: &str| sql == TODOS_QUERY)
            .times(1)
            .returning(|_| {
                Ok(QueryResult {
                    rows: Vec::new(),
                    row_count: 0,
                })
            });

        let success = mock_responders::success_context();
        success
            .expect()
            .withf(|body: &ResponseBody| {
                *body
                    == ResponseBody {
                        message: "0 item(s) returned".to_string(),
                        data: Vec::new(),
                        status: true,
                    }
            })
            .times(1)
            .returning(|body| Response {
                status_code: 200,
                body,
            });
        let failure = mock_responders::failure_context();
        failure.expect().never();

        let response = get_todos(&mut client);

        assert_eq!(response.status_code, 200);
        // `connect` and `end` call counts are checked when `client` drops.
    }

    #[test]
    #[serial]
    fn should_report_query_errors() {
        let mut client = connected_client();
        client
            .expect_query()
            .withf(|sql: &str| sql == TODOS_QUERY)
            .times(1)
            .returning(|_| Err(QueryError("Unable to retrieve rows".to_string())));

        let failure = mock_responders::failure_context();
        failure
            .expect()
            .withf(|body: &ResponseBody| body.message == "Unable to retrieve rows" && !body.status)
            .times(1)
            .returning(|body| Response {
                status_code: 500,
                body,
            });
        let success = mock_responders::success_context();
        success.expect().never();

        let response = get_todos(&mut client);

        assert_eq!(response.status_code, 500);
        assert!(response.body.data.is_empty());
    }

    #[test]
    #[serial]
    fn connect_failure_skips_query_and_end() {
        let mut client = MockTodoClient::new();
        client
            .expect_connect()
            .times(1)
            .returning(|| Err(QueryError("connection refused".to_string())));
        client.expect_query().never();
        client.expect_end().never();

        let failure = mock_responders::failure_context();
        failure
            .expect()
            .withf(|body: &ResponseBody| body.message == "connection refused")
            .times(1)
            .returning(|body| Response {
                status_code: 503,
                body,
            });

        assert_eq!(get_todos(&mut client).status_code, 503);
    }

    #[test]
    #[serial]
    fn checkpoint_clears_expectations_between_phases() {
        let success = mock_responders::success_context();
        success.expect().times(1).returning(|body| Response {
            status_code: 200,
            body,
        });

        let rows = vec![Todo {
            id: 1,
            title: "write tests".to_string(),
            done: false,
        }];
        let mut real = InMemoryTodoClient::new(rows.clone());
        let response = get_todos(&mut real);
        assert_eq!(response.body.data, rows);
        assert_eq!(response.body.message, "1 item(s) returned");

        // Verify and forget the first phase, then expect nothing more.
        success.checkpoint();
        success.expect().never();
    }
}


fn main() {
    fizzbuzz_testing::logging::init_logging(Some("debug"));
    println!("Module mocks - run with: cargo test --bin p6_module_mocks");

    let mut client = InMemoryTodoClient::new(vec![
        Todo {
            id: 1,
            title: "classify 15".to_string(),
            done: true,
        },
        Todo {
            id: 2,
            title: "mock the responders".to_string(),
            done: false,
        },
    ]);
    let response = get_todos(&mut client);
    println!("{} {}", response.status_code, response.body.message);
    for todo in &response.body.data {
        println!("  [{}] {}", if todo.done { "x" } else { " " }, todo.title);
    }
}
