use std::str::FromStr;

/// Parse a user-supplied enum value, surfacing the type's own message
/// (which lists the accepted values).
pub fn parse_arg<T>(raw: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = String>,
{
    raw.parse().map_err(|error: String| anyhow::anyhow!(error))
}
