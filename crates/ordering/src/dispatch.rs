//! Order hand-off to a messaging channel.
//!
//! Orders leave the shop as a WhatsApp deep link (`https://wa.me/<number>?text=...`)
//! with the rendered message percent-encoded into the `text` parameter.

use std::io::{self, Write};

use thiserror::Error;
use tracing::info;
use url::Url;

/// Base of WhatsApp click-to-chat links.
pub const WHATSAPP_BASE_URL: &str = "https://wa.me/";

/// Dispatch errors.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Invalid destination: {0}")]
    InvalidDestination(String),
}

/// Hands a finished order message to an external channel.
pub trait OrderDispatcher {
    /// Dispatch `message`. Returning `Ok` means the hand-off happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the message could not be handed off.
    fn dispatch(&mut self, message: &str) -> Result<(), DispatchError>;
}

/// Build the WhatsApp deep link for `message` addressed to `number`.
///
/// `number` is the full international number, digits only.
///
/// # Errors
///
/// Returns `InvalidDestination` if `number` is empty or not all digits.
pub fn whatsapp_link(number: &str, message: &str) -> Result<Url, DispatchError> {
    if number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return Err(DispatchError::InvalidDestination(number.to_string()));
    }
    let raw = format!(
        "{WHATSAPP_BASE_URL}{number}?text={}",
        urlencoding::encode(message)
    );
    Ok(Url::parse(&raw)?)
}

/// Writes the deep link for each order to `out`, one per line, for the
/// user (or a launcher) to open.
#[derive(Debug)]
pub struct DeepLinkDispatcher<W: Write> {
    number: String,
    out: W,
    last_link: Option<Url>,
}

impl<W: Write> DeepLinkDispatcher<W> {
    #[must_use]
    pub fn new(number: impl Into<String>, out: W) -> Self {
        Self {
            number: number.into(),
            out,
            last_link: None,
        }
    }

    /// Link produced by the latest successful dispatch.
    #[must_use]
    pub const fn last_link(&self) -> Option<&Url> {
        self.last_link.as_ref()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> OrderDispatcher for DeepLinkDispatcher<W> {
    fn dispatch(&mut self, message: &str) -> Result<(), DispatchError> {
        let link = whatsapp_link(&self.number, message)?;
        writeln!(self.out, "{link}")?;
        self.out.flush()?;
        info!(destination = %self.number, "Order handed off to WhatsApp");
        self.last_link = Some(link);
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_link_encodes_message() {
        let link = whatsapp_link("5511976724548", "2x Burger - R$ 20.00\nObrigado!").unwrap();
        assert_eq!(
            link.as_str(),
            "https://wa.me/5511976724548?text=2x%20Burger%20-%20R%24%2020.00%0AObrigado%21"
        );
        assert_eq!(link.host_str(), Some("wa.me"));
    }

    #[test]
    fn test_whatsapp_link_round_trips_text() {
        let message = "Olá, gostaria de fazer um pedido:\nMétodo: Entrega";
        let link = whatsapp_link("5511999999999", message).unwrap();
        let text = link
            .query_pairs()
            .find(|(key, _)| key == "text")
            .map(|(_, value)| value.into_owned())
            .unwrap();
        assert_eq!(text, message);
    }

    #[test]
    fn test_whatsapp_link_rejects_bad_numbers() {
        assert!(matches!(
            whatsapp_link("", "hi"),
            Err(DispatchError::InvalidDestination(_))
        ));
        assert!(matches!(
            whatsapp_link("+55 11 9999", "hi"),
            Err(DispatchError::InvalidDestination(_))
        ));
    }

    #[test]
    fn test_deep_link_dispatcher_writes_link() {
        let mut dispatcher = DeepLinkDispatcher::new("5511999999999", Vec::new());
        dispatcher.dispatch("Oi").unwrap();
        assert_eq!(
            dispatcher.last_link().map(Url::as_str),
            Some("https://wa.me/5511999999999?text=Oi")
        );
        let out = String::from_utf8(dispatcher.into_inner()).unwrap();
        assert_eq!(out, "https://wa.me/5511999999999?text=Oi\n");
    }
}
