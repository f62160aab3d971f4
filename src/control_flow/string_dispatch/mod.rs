//! # String Switch vs Hash Dispatch vs If-Else Chain
//!
//! Three ways to test whether a string belongs to a small fixed key set:
//!
//! - **switch-string**: a `match` over string literals, left to the compiler
//! - **switch-hash**: the hash-bucket-then-equality dispatch a compiler may
//!   generate for a string switch, written out by hand
//! - **if-else**: a chain of `==` checks joined with `||`
//!
//! The key set is chosen so that every member has the same 31-polynomial
//! hash, which makes the bucket step useless and leaves only the equality
//! checks to do real work.
//!
//! Two drivers exist: [`rounds::run_rounds`] for a crude back-to-back timing,
//! and [`StringDispatchRunner`] for the statistical runner in
//! [`crate::utils::timer`].

pub mod bench;
pub mod code;
pub mod rounds;
pub mod test;

use crate::registry::{AlgorithmRunner, VariantClosure};
use std::hint::black_box;
use std::sync::Arc;

pub struct StringDispatchRunner;

impl AlgorithmRunner for StringDispatchRunner {
    fn name(&self) -> &'static str {
        "string_dispatch"
    }

    fn category(&self) -> &'static str {
        "control_flow"
    }

    fn description(&self) -> &'static str {
        "String membership: match on literals vs manual hash dispatch vs if-else chain"
    }

    fn available_variants(&self) -> Vec<&'static str> {
        code::get_variants().iter().map(|v| v.name).collect()
    }

    fn get_variant_closures<'a>(&'a self, size: usize, seed: u64) -> Vec<VariantClosure<'a>> {
        let data: Arc<Vec<String>> = Arc::new(bench::generate_workload(size, seed));

        code::get_variants()
            .into_iter()
            .map(|v| {
                let data = Arc::clone(&data);
                let func = v.function;

                VariantClosure {
                    name: v.name,
                    description: v.description,
                    run: Box::new(move || {
                        let (elapsed, hits) = crate::measure!({
                            let mut hits = 0i64;
                            for key in data.iter() {
                                hits += i64::from(black_box(func(black_box(key.as_str()))));
                            }
                            hits
                        });
                        (elapsed, Some(hits as f64))
                    }),
                }
            })
            .collect()
    }

    fn verify(&self) -> Result<(), String> {
        test::verify_all()
    }
}
