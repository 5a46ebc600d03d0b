use iamc_client::ClientError;

/// Narrow a client result for rendering.
///
/// Transport failures become `Ok(Err(message))` so the view can show the
/// message next to whatever it did load. Anything else fails the command.
pub fn inline<T>(result: Result<T, ClientError>) -> anyhow::Result<Result<T, String>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(error) => match error.inline_message() {
            Some(message) => {
                tracing::debug!(%error, "rendering service error inline");
                Ok(Err(message))
            }
            None => Err(error.into()),
        },
    }
}

/// Like [`inline`], keeping only the error message.
pub fn inline_unit(result: Result<(), ClientError>) -> anyhow::Result<Option<String>> {
    Ok(inline(result)?.err())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_errors_are_rendered_inline() {
        let result: Result<(), ClientError> = Err(ClientError::Api {
            status: 409,
            message: "group name taken".into(),
        });
        assert_eq!(inline_unit(result).unwrap().as_deref(), Some("group name taken"));
    }

    #[test]
    fn decode_errors_fail_the_command() {
        let result: Result<u8, ClientError> = Err(ClientError::Decode("bad body".into()));
        assert!(inline(result).is_err());
    }

    #[test]
    fn success_passes_through() {
        assert_eq!(inline(Ok::<_, ClientError>(7)).unwrap(), Ok(7));
    }
}
