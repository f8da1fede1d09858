//! Server-rendered pages: home, help, about and the 404 fallbacks
//!
//! Pages are assembled from a shared layout function with per-page
//! parameters; no templating engine is involved.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
};

use crate::web::AppState;

const HELP_TEXT: &str = "Search for a city or address on the home page to get the current weather.";

fn layout(title: &str, body: &str, author: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
           <meta charset=\"utf-8\">\n\
           <title>{title}</title>\n\
           <link rel=\"stylesheet\" href=\"/static/css/styles.css\">\n\
         </head>\n\
         <body>\n\
           <div class=\"main-content\">\n\
             <header>\n\
               <h1>{title}</h1>\n\
               <nav><a href=\"/\">Weather</a> <a href=\"/about\">About</a> <a href=\"/help\">Help</a></nav>\n\
             </header>\n\
             {body}\n\
           </div>\n\
           <footer><p>Created by {author}</p></footer>\n\
         </body>\n\
         </html>\n"
    )
}

pub async fn home(State(state): State<Arc<AppState>>) -> Html<String> {
    let body = "<form action=\"/weather\" method=\"get\">\n\
                  <input name=\"address\" placeholder=\"Location\">\n\
                  <button type=\"submit\">Search</button>\n\
                </form>";
    Html(layout("Weather App", body, &state.config.site.author))
}

pub async fn help(State(state): State<Arc<AppState>>) -> Html<String> {
    let body = format!("<p>{HELP_TEXT}</p>");
    Html(layout("Help", &body, &state.config.site.author))
}

pub async fn about(State(state): State<Arc<AppState>>) -> Html<String> {
    let body = "<p>Skycast shows the current weather for any place you can name.</p>";
    Html(layout("About", body, &state.config.site.author))
}

/// 404 for unknown help articles (`/help/{anything}`)
pub async fn help_not_found(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    not_found_page(&state, "Help article not found")
}

/// Fallback 404 for anything no other route matched
pub async fn not_found(State(state): State<Arc<AppState>>) -> (StatusCode, Html<String>) {
    not_found_page(&state, "Page not found")
}

fn not_found_page(state: &AppState, message: &str) -> (StatusCode, Html<String>) {
    let body = format!("<p>{message}</p>");
    (
        StatusCode::NOT_FOUND,
        Html(layout("404", &body, &state.config.site.author)),
    )
}
