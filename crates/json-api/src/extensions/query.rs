//! Query parameter parsing helpers.

use std::{fmt::Display, str::FromStr};

use salvo::oapi::extract::QueryParam;

pub(crate) trait QueryParamExt {
    /// Parse an optional parameter. Blank or unparsable values count as absent.
    fn parse_or_none<T>(self, name: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display;
}

impl QueryParamExt for QueryParam<String, false> {
    fn parse_or_none<T>(self, name: &str) -> Option<T>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.into_inner()?;
        let value = value.trim();

        if value.is_empty() {
            return None;
        }

        value
            .parse::<T>()
            .inspect_err(|error| {
                tracing::debug!(%value, "ignoring \"{name}\" query parameter: {error}");
            })
            .ok()
    }
}
