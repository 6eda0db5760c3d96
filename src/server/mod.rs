//! Server-side API backend and business logic.
//!
//! The backend uses Axum as the web framework, SeaORM over SQLite for persistence and
//! tower-sessions for cookie sessions. Queries are described as
//! [`Specification`](specification::Specification)s and executed by the generic
//! repositories in `data/`.
//!
//! # Architecture
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Specification Layer** (`specification/`) - Declarative filter, order, paging and include descriptions plus their evaluator
//! - **Data Layer** (`data/`) - Generic repository and unit of work over SeaORM
//! - **Model Layer** (`model/`) - Domain models, enums and query parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Session access and authentication guards
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state
//! - **Startup** (`startup`) - Database, migrations, session store and admin seeding
//! - **Router** (`router`) - Axum route configuration
//! - **Docs** (`docs`) - OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** resolves the caller through `AuthGuard`, validates the body into params
//! 3. **Service** builds a specification or opens a unit of work
//! 4. **Data** evaluates the specification against the database
//! 5. **Controller** converts the domain model to a DTO and wraps it in the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod docs;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod specification;
pub mod startup;
pub mod state;
pub mod util;
