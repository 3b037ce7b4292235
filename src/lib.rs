//! dynamock is a dynamic test-double engine.
//!
//! Given a type to stand in for, it produces a [`DynamicMock`] that
//! answers every call routed at it according to rules the test
//! registers at runtime, and can later be asked whether every
//! required rule was actually used.
//!
//! Unlike macro-generated mocks, nothing here is tied to a concrete
//! method signature: a call is an [`Invocation`] (an operation name
//! plus type-erased [`Value`] arguments), a rule is an
//! [`InvocationMocker`] (matchers plus a stub), and dispatch picks
//! the most recently registered rule that matches. Later rules shadow
//! earlier ones, so a test can start from broad stubs and refine them
//! mid-test without removing anything.
//!
//! The mechanism that builds the stand-in object itself is out of
//! scope: any hand-written proxy (or codegen layer) that packages its
//! calls as invocations and forwards them to
//! [`DynamicMock::invoke`] gets the full dispatch, diagnostics and
//! verification behavior, including the hidden defaults for string
//! form, equality and hash.
//!
//! # Example
//!
//! ```
//! use dynamock::{constraint, matcher, stub, DynamicMock, Expected, InvocationMocker};
//!
//! trait Oven {
//!     fn bake(&self, degrees: u32) -> String;
//! }
//!
//! let mock = DynamicMock::new::<dyn Oven>(DynamicMock::name_from_type::<dyn Oven>());
//! assert_eq!(mock.name(), "mockOven");
//!
//! mock.add(
//!     InvocationMocker::new(stub::value(String::from("bread")))
//!         .with(matcher::operation("bake"))
//!         .with(matcher::arguments((constraint::eq(220u32),)))
//!         .expect(Expected::AtLeastOnce),
//! );
//!
//! let baked = mock.invoke(dynamock::invocation!("bake", 220u32)).unwrap();
//! assert_eq!(baked.downcast_ref::<String>(), Some(&String::from("bread")));
//!
//! // an unmatched call fails loudly, with full context attached
//! let failure = mock.invoke(dynamock::invocation!("bake", 100u32)).unwrap_err();
//! assert!(failure.to_string().contains("bake(100)"));
//!
//! mock.verify().unwrap();
//! ```

pub mod constraint;
pub mod matcher;
pub mod stub;

mod dispatcher;
mod error;
mod invocation;
mod mock;
mod mocker;
mod value;

pub use dispatcher::InvocationDispatcher;
pub use error::{Failure, MockFailure};
pub use invocation::Invocation;
pub use mock::{DynamicMock, MockId, EQ, HASH, TO_STRING};
pub use mocker::{Expected, Invokable, InvocationMocker};
pub use value::{ArgValue, Value};
