use anyhow::{Context, Result};
use xpoz_core::api::GalleryApi;
use xpoz_core::graphql::GraphQlTransport;
use xpoz_model::token::{Token, TokenInput};

use super::Output;
use crate::cli::{TokenAction, TokenFields, TokenUpdate};

pub async fn run<T: GraphQlTransport>(
    api: &GalleryApi<T>,
    action: TokenAction,
    output: Output,
) -> Result<()> {
    match action {
        TokenAction::List => {
            let tokens = api.tokens().await?;
            output.emit(&tokens, || tokens.iter().for_each(print_token))
        }
        TokenAction::Create(fields) => {
            let token = api.create_token(&fields.into()).await?;
            output.emit(&token, || print_token(&token))
        }
        TokenAction::Update { id, fields } => {
            let current = api
                .tokens()
                .await?
                .into_iter()
                .find(|t| t.id == id)
                .with_context(|| format!("no token with id {id}"))?;
            let input = fields.apply(TokenInput::from(&current));
            let updated = api.update_token(&id, &input).await?;
            output.emit(&updated, || println!("updated {updated}"))
        }
        TokenAction::Delete { id } => {
            let deleted = api.delete_token(&id).await?;
            output.emit(&deleted, || println!("deleted {deleted}"))
        }
    }
}

fn print_token(token: &Token) {
    let mut flags = Vec::new();
    if token.admin {
        flags.push("admin");
    }
    if token.session_bound {
        flags.push(if token.is_claimed() { "claimed" } else { "unclaimed" });
    }
    let albums = if token.whitelisted_albums.is_empty() {
        "all albums".to_string()
    } else {
        format!("{} albums", token.whitelisted_albums.len())
    };
    println!("{}  {}  [{}]  {albums}", token.id, token.name, flags.join(","));
}

impl From<TokenFields> for TokenInput {
    fn from(fields: TokenFields) -> Self {
        TokenInput {
            name: fields.name,
            admin: fields.admin,
            session_bound: fields.session_bound,
            whitelisted_albums: fields.albums,
        }
    }
}

impl TokenUpdate {
    fn apply(self, mut input: TokenInput) -> TokenInput {
        if let Some(name) = self.name {
            input.name = name;
        }
        if let Some(admin) = self.admin {
            input.admin = admin;
        }
        if let Some(session_bound) = self.session_bound {
            input.session_bound = session_bound;
        }
        if self.clear_albums {
            input.whitelisted_albums.clear();
        } else if let Some(albums) = self.albums {
            input.whitelisted_albums = albums;
        }
        input
    }
}
