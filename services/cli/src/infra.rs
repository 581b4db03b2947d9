use interview_playground::config::AppConfig;
use interview_playground::content::{ContentLibrary, UnknownTag};
use interview_playground::error::AppError;
use interview_playground::playground::DimensionId;
use interview_playground::telemetry;
use std::str::FromStr;
use tracing::info;

/// Configuration plus the content tables every command renders from.
pub(crate) struct Session {
    pub(crate) config: AppConfig,
    pub(crate) library: ContentLibrary,
}

pub(crate) fn bootstrap() -> Result<Session, AppError> {
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    let library = ContentLibrary::load(&config.content)?;
    info!(
        ?config.environment,
        questions = library.questions.questions().len(),
        dimensions = library.dimensions.len(),
        balance_target = config.rubric.balance_target,
        "playground content ready"
    );

    Ok(Session { config, library })
}

pub(crate) fn parse_tag<T>(raw: &str) -> Result<T, String>
where
    T: FromStr<Err = UnknownTag>,
{
    raw.parse().map_err(|err: UnknownTag| err.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct WeightArg {
    pub(crate) id: DimensionId,
    pub(crate) value: i32,
}

pub(crate) fn parse_weight(raw: &str) -> Result<WeightArg, String> {
    let (id, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected DIMENSION=WEIGHT, got '{raw}'"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing dimension id in '{raw}'"));
    }
    let value = value
        .trim()
        .parse::<i32>()
        .map_err(|err| format!("failed to parse weight in '{raw}' ({err})"))?;
    Ok(WeightArg {
        id: DimensionId::new(id),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use interview_playground::content::Audience;

    #[test]
    fn parses_weight_pairs() {
        let arg = parse_weight(" communication = 20 ").expect("valid weight");
        assert_eq!(arg.id.as_str(), "communication");
        assert_eq!(arg.value, 20);

        assert!(parse_weight("communication").is_err());
        assert!(parse_weight("=20").is_err());
        assert!(parse_weight("communication=lots").is_err());
    }

    #[test]
    fn tag_errors_name_the_rejected_value() {
        assert_eq!(parse_tag::<Audience>("both"), Ok(Audience::Both));
        let err = parse_tag::<Audience>("recruiter").expect_err("unknown role");
        assert!(err.contains("recruiter"));
    }
}
