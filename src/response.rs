use std::fmt;

/// Outcome of a stage: either a success value or the reason the chain failed.
///
/// `Response` is the currency of every stage in this crate. Stages never signal
/// failure by panicking; they return [`Response::Failure`] and the combinators
/// carry it untouched to the end of the chain.
///
/// # Examples
///
/// ```rust
/// use rop::Response;
///
/// let parsed: Response<i32> = Response::success(42);
/// let rejected: Response<i32> = Response::failure("not a number");
///
/// assert_eq!(parsed.map(|x| x * 2), Response::success(84));
/// assert_eq!(rejected.failure_reason(), Some("not a number"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Response<T> {
    /// The stage succeeded with a value
    Success(T),
    /// The stage failed; later stages are skipped
    Failure(String),
}

/// Tag of a [`Response`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseType {
    Success,
    Failure,
}

impl fmt::Display for ResponseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseType::Success => write!(f, "success"),
            ResponseType::Failure => write!(f, "failure"),
        }
    }
}

/// A failed [`Response`] that has left the railway for ordinary `Result` code.
///
/// ```rust
/// use rop::{ChainFailure, Response};
///
/// fn total(a: Response<u32>, b: Response<u32>) -> Result<u32, ChainFailure> {
///     Ok(a.into_result()? + b.into_result()?)
/// }
///
/// assert_eq!(total(Response::success(1), Response::success(2)), Ok(3));
/// let err = total(Response::success(1), Response::failure("offline")).unwrap_err();
/// assert_eq!(err.to_string(), "offline");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{reason}")]
pub struct ChainFailure {
    reason: String,
}

impl ChainFailure {
    /// The reason carried by the failed response.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn into_reason(self) -> String {
        self.reason
    }
}

impl<T> Response<T> {
    /// Wraps a value on the success track.
    #[inline]
    pub const fn success(value: T) -> Self {
        Response::Success(value)
    }

    /// Puts a reason on the failure track.
    ///
    /// Any string is accepted, including an empty one.
    ///
    /// ```rust
    /// use rop::Response;
    ///
    /// let r: Response<()> = Response::failure("");
    /// assert_eq!(r.failure_reason(), Some(""));
    /// ```
    #[inline]
    pub fn failure(reason: impl Into<String>) -> Self {
        Response::Failure(reason.into())
    }

    /// Returns which track this response is on.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rop::{Response, ResponseType};
    ///
    /// assert_eq!(Response::success(1).outcome(), ResponseType::Success);
    /// assert_eq!(Response::<i32>::failure("no").outcome(), ResponseType::Failure);
    /// ```
    #[inline]
    pub const fn outcome(&self) -> ResponseType {
        match self {
            Response::Success(_) => ResponseType::Success,
            Response::Failure(_) => ResponseType::Failure,
        }
    }

    /// Returns `true` if the response is `Success`.
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, Response::Success(_))
    }

    /// Returns `true` if the response is `Failure`.
    #[inline]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Response::Failure(_))
    }

    /// Borrows the success value, if any.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rop::Response;
    ///
    /// assert_eq!(Response::success(7).value(), Some(&7));
    /// assert_eq!(Response::<i32>::failure("no").value(), None);
    /// ```
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Response::Success(value) => Some(value),
            Response::Failure(_) => None,
        }
    }

    /// Converts from `Response<T>` to `Option<T>`, discarding any failure reason.
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Response::Success(value) => Some(value),
            Response::Failure(_) => None,
        }
    }

    /// Borrows the failure reason, if any.
    #[inline]
    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Response::Success(_) => None,
            Response::Failure(reason) => Some(reason),
        }
    }

    /// Converts from `Response<T>` to `Option<String>`, discarding any value.
    #[inline]
    pub fn into_failure_reason(self) -> Option<String> {
        match self {
            Response::Success(_) => None,
            Response::Failure(reason) => Some(reason),
        }
    }

    /// Converts from `&Response<T>` to `Response<&T>`.
    ///
    /// The failure reason is cloned.
    #[inline]
    pub fn as_ref(&self) -> Response<&T> {
        match self {
            Response::Success(value) => Response::Success(value),
            Response::Failure(reason) => Response::Failure(reason.clone()),
        }
    }

    /// Maps the success value, leaving a failure untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rop::Response;
    ///
    /// let x: Response<i32> = Response::success(5);
    /// assert_eq!(x.map(|v| v * 2), Response::success(10));
    ///
    /// let y: Response<i32> = Response::failure("bad input");
    /// assert_eq!(y.map(|v| v * 2), Response::failure("bad input"));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Response::Success(value) => Response::Success(f(value)),
            Response::Failure(reason) => Response::Failure(reason),
        }
    }

    /// Calls `f` with the success value, or forwards the failure without calling it.
    ///
    /// This is the single-response form of [`bind`](crate::bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rop::Response;
    ///
    /// let halve = |v: i32| {
    ///     if v % 2 == 0 { Response::success(v / 2) } else { Response::failure("odd") }
    /// };
    /// assert_eq!(Response::success(8).and_then(halve), Response::success(4));
    /// assert_eq!(Response::success(3).and_then(halve), Response::failure("odd"));
    /// assert_eq!(Response::failure("early").and_then(halve), Response::failure("early"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Response<U>
    where
        F: FnOnce(T) -> Response<U>,
    {
        match self {
            Response::Success(value) => f(value),
            Response::Failure(reason) => Response::Failure(reason),
        }
    }

    /// Calls `f` with the failure reason, or keeps the success value.
    ///
    /// ```rust
    /// use rop::Response;
    ///
    /// let fallback = |_reason: String| Response::success(0);
    /// assert_eq!(Response::failure("missing").or_else(fallback), Response::success(0));
    /// assert_eq!(Response::success(3).or_else(fallback), Response::success(3));
    /// ```
    #[inline]
    pub fn or_else<F>(self, f: F) -> Response<T>
    where
        F: FnOnce(String) -> Response<T>,
    {
        match self {
            Response::Success(value) => Response::Success(value),
            Response::Failure(reason) => f(reason),
        }
    }

    /// Returns the success value or a default.
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Response::Success(value) => value,
            Response::Failure(_) => default,
        }
    }

    /// Returns the success value or computes one from the failure reason.
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(String) -> T,
    {
        match self {
            Response::Success(value) => value,
            Response::Failure(reason) => f(reason),
        }
    }

    /// Returns the success value.
    ///
    /// # Panics
    ///
    /// Panics with the failure reason if the response is `Failure`.
    #[inline]
    #[track_caller]
    pub fn unwrap_success(self) -> T {
        match self {
            Response::Success(value) => value,
            Response::Failure(reason) => {
                panic!("called `Response::unwrap_success()` on a failure: {reason}")
            }
        }
    }

    /// Returns the failure reason.
    ///
    /// # Panics
    ///
    /// Panics if the response is `Success`.
    #[inline]
    #[track_caller]
    pub fn unwrap_failure(self) -> String
    where
        T: fmt::Debug,
    {
        match self {
            Response::Success(value) => {
                panic!("called `Response::unwrap_failure()` on a success: {value:?}")
            }
            Response::Failure(reason) => reason,
        }
    }

    /// Leaves the railway: `Success(v)` becomes `Ok(v)`, `Failure(r)` becomes
    /// `Err(ChainFailure)` carrying `r`.
    #[inline]
    pub fn into_result(self) -> Result<T, ChainFailure> {
        match self {
            Response::Success(value) => Ok(value),
            Response::Failure(reason) => Err(ChainFailure { reason }),
        }
    }
}

impl<T> From<Response<T>> for Result<T, ChainFailure> {
    fn from(response: Response<T>) -> Self {
        response.into_result()
    }
}

/// Joins the railway from a `Result`, using the error's display text as the reason.
///
/// ```rust
/// use rop::Response;
///
/// let parsed: Response<i32> = "42".parse::<i32>().into();
/// assert_eq!(parsed, Response::success(42));
///
/// let parsed: Response<i32> = "abc".parse::<i32>().into();
/// assert!(parsed.is_failure());
/// ```
impl<T, E> From<Result<T, E>> for Response<T>
where
    E: fmt::Display,
{
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Response::Success(value),
            Err(err) => Response::Failure(err.to_string()),
        }
    }
}
