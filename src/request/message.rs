use super::{GraphQLRequest, RequestParser};
use crate::error::Result;

/// A message of a GraphQL websocket protocol, e.g. `{"type": "subscribe", "id": "1", "payload": {...}}`.
///
/// Only the envelope is read. The payload is kept as the raw JSON text it was sent as, so that
/// messages can be dispatched on their `type` before their payload is parsed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct GraphQLSocketMessage<'a> {
    pub message_type: &'a str,
    pub id: Option<&'a str>,
    /// The JSON text of the payload, a slice of the message's source.
    pub payload: Option<&'a [u8]>,
}

impl<'a> GraphQLSocketMessage<'a> {
    /// Parses this message's payload as a single request, using the given parser's context,
    /// options, cache and hash provider.
    ///
    /// Returns `None` when the message has no payload or its payload is `null`.
    pub fn parse_payload(
        &self,
        parser: &RequestParser<'a, '_>,
    ) -> Result<Option<GraphQLRequest<'a>>> {
        match self.payload {
            Some(payload) => parser.parse_single(payload),
            None => Ok(None),
        }
    }
}
