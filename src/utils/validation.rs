use crate::utils::error::{Result, StatsError};
use std::fmt::Display;
use std::ops::RangeInclusive;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field: &str, value: impl Display, reason: impl Into<String>) -> StatsError {
    StatsError::InvalidConfigValueError {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// 只接受 http / https 的絕對網址
pub fn validate_url(field: &str, raw: &str) -> Result<()> {
    let url =
        Url::parse(raw).map_err(|e| invalid(field, raw, format!("not a valid URL ({})", e)))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(field, raw, format!("scheme '{}' is not http(s)", other))),
    }
}

pub fn validate_not_blank(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field, value, "must not be blank"));
    }
    Ok(())
}

pub fn validate_path(field: &str, path: &str) -> Result<()> {
    validate_not_blank(field, path)?;
    if path.contains('\0') {
        return Err(invalid(field, path.escape_default(), "contains a NUL byte"));
    }
    Ok(())
}

pub fn validate_range<T>(field: &str, value: T, range: RangeInclusive<T>) -> Result<()>
where
    T: PartialOrd + Display,
{
    if range.contains(&value) {
        Ok(())
    } else {
        Err(invalid(
            field,
            &value,
            format!("expected {}..={}", range.start(), range.end()),
        ))
    }
}

pub fn validate_at_least(field: &str, value: u32, min: u32) -> Result<()> {
    validate_range(field, value, min..=u32::MAX)
}

/// 必填欄位，缺少時回傳 MissingConfigError
pub fn require_field<'a, T>(field: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| StatsError::MissingConfigError {
        field: field.to_string(),
    })
}
