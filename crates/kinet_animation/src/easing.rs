//! Easing functions and the easing registry
//!
//! An easing function is a pure mapping from normalized progress `[0,1]` to a
//! curve-adjusted progress value. Overshoot curves (back, elastic) legally
//! exceed `[0,1]`; interpolation tolerates that.
//!
//! The registry is an explicit object owned by the scheduling context rather
//! than a process-global table. Custom functions can be registered at
//! runtime; re-registering a name overwrites it (last write wins). Resolving
//! an unknown name falls back to `ease` - animation continuity is preferred
//! over strict validation.

use std::f64::consts::PI;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::error::{AnimationError, Result};

/// A shared easing function
pub type EasingFn = Arc<dyn Fn(f64) -> f64 + Send + Sync>;

/// Name of the fallback curve used when resolution fails
pub const DEFAULT_EASING: &str = "ease";

/// An easing selector: a registered name or a direct function
#[derive(Clone)]
pub enum Easing {
    Named(String),
    Custom(EasingFn),
}

impl Easing {
    /// Wrap a closure as a custom easing
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Easing::Custom(Arc::new(f))
    }
}

impl From<&str> for Easing {
    fn from(name: &str) -> Self {
        Easing::Named(name.to_string())
    }
}

impl From<String> for Easing {
    fn from(name: String) -> Self {
        Easing::Named(name)
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Easing::Named(name) => f.debug_tuple("Named").field(name).finish(),
            Easing::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Named(DEFAULT_EASING.to_string())
    }
}

/// Create a cubic-bezier easing function
///
/// This is the single-axis parametric fit used by the named `ease*` curves:
/// it evaluates the cubic in `t` built from the x control ordinates and does
/// not solve for the bezier parameter, so the y ordinates never enter the
/// computation. Kept for output parity with the curves it approximates.
pub fn cubic_bezier(x1: f64, _y1: f64, x2: f64, _y2: f64) -> EasingFn {
    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;
    Arc::new(move |t| ((ax * t + bx) * t + cx) * t)
}

/// Registry mapping easing names to functions
pub struct EasingRegistry {
    table: FxHashMap<String, EasingFn>,
}

impl EasingRegistry {
    /// Create a registry pre-populated with the built-in catalog
    pub fn new() -> Self {
        let mut registry = Self {
            table: FxHashMap::default(),
        };
        registry.install_builtins();
        registry
    }

    /// Register a custom easing function under a name
    ///
    /// Overwrites silently if the name already exists.
    pub fn register<F>(&mut self, name: impl Into<String>, f: F)
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        self.table.insert(name.into(), Arc::new(f));
    }

    /// Look up a function by name
    pub fn lookup(&self, name: &str) -> Result<EasingFn> {
        self.table
            .get(name)
            .cloned()
            .ok_or_else(|| AnimationError::UnknownEasing {
                name: name.to_string(),
            })
    }

    /// Resolve an easing selector to a function
    ///
    /// Unknown names fall back to `ease` rather than failing.
    pub fn resolve(&self, easing: &Easing) -> EasingFn {
        match easing {
            Easing::Custom(f) => f.clone(),
            Easing::Named(name) => self.lookup(name).unwrap_or_else(|err| {
                tracing::debug!("{err}, falling back to {DEFAULT_EASING}");
                self.table
                    .get(DEFAULT_EASING)
                    .cloned()
                    .unwrap_or_else(|| Arc::new(|t| t))
            }),
        }
    }

    /// Names of all registered functions
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    fn install_builtins(&mut self) {
        self.register("linear", |t| t);

        self.table
            .insert("ease".into(), cubic_bezier(0.25, 0.1, 0.25, 1.0));
        self.table
            .insert("easeIn".into(), cubic_bezier(0.42, 0.0, 1.0, 1.0));
        self.table
            .insert("easeOut".into(), cubic_bezier(0.0, 0.0, 0.58, 1.0));
        self.table
            .insert("easeInOut".into(), cubic_bezier(0.42, 0.0, 0.58, 1.0));

        self.register("easeInQuad", |t| t * t);
        self.register("easeOutQuad", |t| t * (2.0 - t));
        self.register("easeInOutQuad", |t| {
            if t < 0.5 {
                2.0 * t * t
            } else {
                -1.0 + (4.0 - 2.0 * t) * t
            }
        });

        self.register("easeInCubic", |t| t * t * t);
        self.register("easeOutCubic", |t| (t - 1.0).powi(3) + 1.0);
        self.register("easeInOutCubic", |t| {
            if t < 0.5 {
                4.0 * t * t * t
            } else {
                (t - 1.0) * (2.0 * t - 2.0) * (2.0 * t - 2.0) + 1.0
            }
        });

        self.register("easeInQuart", |t| t * t * t * t);
        self.register("easeOutQuart", |t| 1.0 - (t - 1.0).powi(4));
        self.register("easeInOutQuart", |t| {
            if t < 0.5 {
                8.0 * t.powi(4)
            } else {
                1.0 - 8.0 * (t - 1.0).powi(4)
            }
        });

        self.register("easeInQuint", |t| t.powi(5));
        self.register("easeOutQuint", |t| 1.0 + (t - 1.0).powi(5));
        self.register("easeInOutQuint", |t| {
            if t < 0.5 {
                16.0 * t.powi(5)
            } else {
                1.0 + 16.0 * (t - 1.0).powi(5)
            }
        });

        self.register("easeInSine", |t| 1.0 - (t * PI / 2.0).cos());
        self.register("easeOutSine", |t| (t * PI / 2.0).sin());
        self.register("easeInOutSine", |t| -((PI * t).cos() - 1.0) / 2.0);

        self.register("easeInExpo", |t| {
            if t == 0.0 {
                0.0
            } else {
                2f64.powf(10.0 * (t - 1.0))
            }
        });
        self.register("easeOutExpo", |t| {
            if t == 1.0 {
                1.0
            } else {
                1.0 - 2f64.powf(-10.0 * t)
            }
        });
        self.register("easeInOutExpo", |t| {
            if t == 0.0 {
                return 0.0;
            }
            if t == 1.0 {
                return 1.0;
            }
            let t = t / 0.5;
            if t < 1.0 {
                0.5 * 2f64.powf(10.0 * (t - 1.0))
            } else {
                0.5 * (-2f64.powf(-10.0 * (t - 1.0)) + 2.0)
            }
        });

        self.register("easeInCirc", |t| -((1.0 - t * t).sqrt() - 1.0));
        self.register("easeOutCirc", |t| {
            let t = t - 1.0;
            (1.0 - t * t).sqrt()
        });
        self.register("easeInOutCirc", |t| {
            let t = t / 0.5;
            if t < 1.0 {
                -0.5 * ((1.0 - t * t).sqrt() - 1.0)
            } else {
                let t = t - 2.0;
                0.5 * ((1.0 - t * t).sqrt() + 1.0)
            }
        });

        const BACK_S: f64 = 1.70158;
        self.register("easeInBack", |t| t * t * ((BACK_S + 1.0) * t - BACK_S));
        self.register("easeOutBack", |t| {
            let t = t - 1.0;
            t * t * ((BACK_S + 1.0) * t + BACK_S) + 1.0
        });
        self.register("easeInOutBack", |t| {
            let s = BACK_S * 1.525;
            let t = t / 0.5;
            if t < 1.0 {
                0.5 * (t * t * ((s + 1.0) * t - s))
            } else {
                let t = t - 2.0;
                0.5 * (t * t * ((s + 1.0) * t + s) + 2.0)
            }
        });

        self.register("easeInElastic", |t| {
            if t == 0.0 {
                return 0.0;
            }
            if t == 1.0 {
                return 1.0;
            }
            let p = 0.3;
            let s = p / 4.0;
            let t = t - 1.0;
            -(2f64.powf(10.0 * t) * ((t - s) * (2.0 * PI) / p).sin())
        });
        self.register("easeOutElastic", |t| {
            if t == 0.0 {
                return 0.0;
            }
            if t == 1.0 {
                return 1.0;
            }
            let p = 0.3;
            let s = p / 4.0;
            2f64.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / p).sin() + 1.0
        });
        self.register("easeInOutElastic", |t| {
            if t == 0.0 {
                return 0.0;
            }
            let t = t / 0.5;
            if t == 2.0 {
                return 1.0;
            }
            let p = 0.3 * 1.5;
            let s = p / 4.0;
            if t < 1.0 {
                let t = t - 1.0;
                -0.5 * (2f64.powf(10.0 * t) * ((t - s) * (2.0 * PI) / p).sin())
            } else {
                let t = t - 1.0;
                2f64.powf(-10.0 * t) * ((t - s) * (2.0 * PI) / p).sin() * 0.5 + 1.0
            }
        });

        self.register("easeInBounce", |t| 1.0 - bounce_out(1.0 - t));
        self.register("easeOutBounce", bounce_out);
        self.register("easeInOutBounce", |t| {
            if t < 0.5 {
                (1.0 - bounce_out(1.0 - t * 2.0)) * 0.5
            } else {
                bounce_out(t * 2.0 - 1.0) * 0.5 + 0.5
            }
        });
    }
}

impl Default for EasingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn bounce_out(t: f64) -> f64 {
    if t < 1.0 / 2.75 {
        7.5625 * t * t
    } else if t < 2.0 / 2.75 {
        let t = t - 1.5 / 2.75;
        7.5625 * t * t + 0.75
    } else if t < 2.5 / 2.75 {
        let t = t - 2.25 / 2.75;
        7.5625 * t * t + 0.9375
    } else {
        let t = t - 2.625 / 2.75;
        7.5625 * t * t + 0.984375
    }
}
