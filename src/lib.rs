//! Setup and teardown helpers for the end-to-end tests of an
//! operator-managed storage deployment
//!
//! ## Usage
//!
//! Add the dependency to your `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! storage-deploy-test-commons = "0.1"
//! ```
//!
//! Then `use` the prelude module in your test files:
//!
//! ```rust
//! use storage_deploy_test_commons::test::prelude::*;
//! ```
//!
//! ## Example
//!
//! The [`test::deploy_manager::TestDeployManager`] is used to set up and
//! tear down the storage deployment. A
//! [`test::temporary_namespace::TemporaryNamespace`] deletes the namespace
//! and the storage cluster in it if it goes out of scope, which is also the
//! case if a test case panics.
//!
//! ```rust,no_run
//! use storage_deploy_test_commons::test::prelude::*;
//!
//! let client = TestDeployManager::new();
//! let namespace = TemporaryNamespace::unique(&client, "pvc-test");
//!
//! client.create::<PersistentVolumeClaim>(
//!     &namespace,
//!     "
//!         apiVersion: v1
//!         kind: PersistentVolumeClaim
//!         metadata:
//!           name: data
//!         spec:
//!           accessModes: [ReadWriteOnce]
//!           resources:
//!             requests:
//!               storage: 1Gi
//!     ",
//! );
//!
//! let pvc = client.wait_for_pvc_bound("data", &namespace);
//! assert_that(&pvc).is_bound();
//! ```

pub mod error;
pub mod test;
