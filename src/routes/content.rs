use actix_web::{web, HttpResponse, Responder};

use crate::core::annotate::{annotate, extract_hashtags, is_valid_hashtag, render, LinkTemplate};
use crate::models::{AnnotateRequest, AnnotateResponse, ErrorResponse, HashtagResponse, Token};
use crate::routes::discover::AppState;

/// Configure content routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/content/annotate", web::post().to(annotate_text))
        .route("/content/hashtags/{tag}", web::get().to(resolve_hashtag));
}

/// Link templates for the network's own HTML rendering
///
/// Token values are word characters only, so they are safe inside the href;
/// literal runs pass through `escape_html` since render() emits them via the
/// template.
pub struct HtmlLinks;

impl LinkTemplate for HtmlLinks {
    fn hashtag(&self, tag: &str) -> String {
        format!(
            r#"<a href="/hashtag/{}">#{}</a>"#,
            tag.to_lowercase(),
            escape_html(tag)
        )
    }

    fn user(&self, name: &str) -> String {
        format!(r#"<a href="/profile/{}">@{}</a>"#, name, escape_html(name))
    }

    fn pet(&self, name: &str) -> String {
        format!(r#"<a href="/pet/{}">@{}</a>"#, name, escape_html(name))
    }

    fn literal(&self, text: &str) -> String {
        escape_html(text)
    }
}

/// Escape a string for use in HTML text nodes and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Annotation endpoint
///
/// POST /api/v1/content/annotate
///
/// Request body:
/// ```json
/// { "text": "Hello #dog and @alice with @pet:rex" }
/// ```
async fn annotate_text(
    state: web::Data<AppState>,
    req: web::Json<AnnotateRequest>,
) -> impl Responder {
    let max_chars = state.settings.content.max_text_chars;
    let char_count = req.text.chars().count();

    if char_count > max_chars {
        tracing::info!("Rejecting annotate request of {} chars (max {})", char_count, max_chars);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Text too long".to_string(),
            message: format!("Text exceeds limit of {} characters", max_chars),
            status_code: 400,
        });
    }

    let annotated = annotate(&req.text);
    let tokens: Vec<Token> = annotated.tokens().cloned().collect();
    let hashtags = extract_hashtags(&req.text);
    let html = render(&annotated, &HtmlLinks);

    tracing::debug!(
        "Annotated {} chars into {} segments ({} tokens)",
        char_count,
        annotated.segments.len(),
        tokens.len()
    );

    HttpResponse::Ok().json(AnnotateResponse {
        annotated,
        tokens,
        hashtags,
        html,
    })
}

/// Hashtag route-parameter resolution
///
/// GET /api/v1/content/hashtags/{tag}
///
/// Rejects malformed tags before any storage lookup is attempted upstream.
async fn resolve_hashtag(path: web::Path<String>) -> impl Responder {
    let tag = path.into_inner();

    if !is_valid_hashtag(&tag) {
        tracing::info!("Rejecting malformed hashtag segment: {:?}", tag);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid hashtag".to_string(),
            message: "Hashtags must be non-empty and contain only word characters".to_string(),
            status_code: 400,
        });
    }

    HttpResponse::Ok().json(HashtagResponse {
        tag: tag.to_lowercase(),
        valid: true,
    })
}
