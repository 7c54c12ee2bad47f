//! Route table
//!
//! Every endpoint the service exposes is listed in [`EMPLOYEE_ROUTES`].
//! The router is built from this table at startup, grouping operations
//! that share a path into one method router. Each path also answers with
//! a trailing slash, so `/api/v1/employees/` lists like `/api/v1/employees`.

use axum::http::Method;
use axum::routing::MethodRouter;
use axum::Router;
use employee_domain::EmployeeRepository;

use super::handlers;
use super::SharedService;

/// Collection path
pub const EMPLOYEES_PATH: &str = "/api/v1/employees";

/// Single-record path
pub const EMPLOYEE_PATH: &str = "/api/v1/employees/{id}";

/// The five directory operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    List,
    Create,
    Get,
    Update,
    Delete,
}

impl Operation {
    pub fn method(&self) -> Method {
        match self {
            Operation::List | Operation::Get => Method::GET,
            Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operation::List => "list",
            Operation::Create => "create",
            Operation::Get => "get",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }

    fn attach<R>(self, router: MethodRouter<SharedService<R>>) -> MethodRouter<SharedService<R>>
    where
        R: EmployeeRepository + 'static,
    {
        match self {
            Operation::List => router.get(handlers::list::<R>),
            Operation::Create => router.post(handlers::create::<R>),
            Operation::Get => router.get(handlers::get_by_id::<R>),
            Operation::Update => router.put(handlers::update::<R>),
            Operation::Delete => router.delete(handlers::delete::<R>),
        }
    }
}

/// One row of the route table
#[derive(Debug, Clone, Copy)]
pub struct Route {
    pub path: &'static str,
    pub operation: Operation,
}

pub const EMPLOYEE_ROUTES: [Route; 5] = [
    Route {
        path: EMPLOYEES_PATH,
        operation: Operation::List,
    },
    Route {
        path: EMPLOYEES_PATH,
        operation: Operation::Create,
    },
    Route {
        path: EMPLOYEE_PATH,
        operation: Operation::Get,
    },
    Route {
        path: EMPLOYEE_PATH,
        operation: Operation::Update,
    },
    Route {
        path: EMPLOYEE_PATH,
        operation: Operation::Delete,
    },
];

/// Build the employee router from [`EMPLOYEE_ROUTES`].
pub fn employee_router<R>(service: SharedService<R>) -> Router
where
    R: EmployeeRepository + 'static,
{
    let mut paths: Vec<&'static str> = Vec::new();
    for route in EMPLOYEE_ROUTES.iter() {
        if !paths.contains(&route.path) {
            paths.push(route.path);
        }
    }

    let mut router = Router::new();
    for path in paths {
        let method_router = EMPLOYEE_ROUTES
            .iter()
            .filter(|route| route.path == path)
            .fold(MethodRouter::new(), |acc, route| route.operation.attach::<R>(acc));
        router = router
            .route(path, method_router.clone())
            .route(&format!("{path}/"), method_router);
    }

    router.with_state(service)
}
