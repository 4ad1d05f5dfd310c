use crate::cli::read;
use crate::cli::tokens::args::Query;
use crate::cli::tokens::response::TokenResponse;
use alloy::primitives::Address;
use eyre::{Result, WrapErr};
use store::token::{model::TokenInfo, store::TokenFile};

pub fn list(query: &Query) -> Result<()> {
    let tokens = TokenFile::new(&query.tokens_file).load()?;
    let token = query.token.as_deref().map(read::parse_address).transpose()?;

    println!("{}", render(select(tokens, token))?);

    Ok(())
}

/// Keeps `token` only, when given, ordered by symbol.
pub fn select(mut tokens: Vec<TokenInfo>, token: Option<Address>) -> Vec<TokenInfo> {
    if let Some(token) = token {
        tokens.retain(|info| info.address == token);
    }
    tokens.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    tokens
}

pub fn render(tokens: Vec<TokenInfo>) -> Result<String> {
    if tokens.is_empty() {
        return Ok("No Tokens Found".to_string());
    }

    let response: Vec<TokenResponse> = tokens.into_iter().map(TokenResponse).collect();
    serde_json::to_string_pretty(&response).wrap_err("encode tokens")
}
