use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};

use crate::core::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use crate::ui::HomePage;

/// Path of the stylesheet cargo-leptos builds from `style/tailwind.css`
pub const STYLESHEET_HREF: &str = "/pkg/my-website.css";

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        {document(view! {
            <AutoReload options=options.clone() />
            <HydrationScripts options/>
        })}
    }
}

/// The `<html>` tree around [`App`]. `scripts` lands in `<head>` ahead of
/// the meta tags.
fn document(scripts: impl IntoView + 'static) -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                {scripts}
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href=STYLESHEET_HREF/>

        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>

        <HomePage/>
    }
}

/// Render the served document as a standalone HTML string, without a
/// server or hydration scripts.
///
/// Head tags registered by [`App`] are injected the same way the Axum
/// integration does it.
#[cfg(feature = "ssr")]
pub async fn render_page() -> String {
    use futures::StreamExt;
    use leptos::tachys::view::RenderHtml;
    use leptos_meta::ServerMetaContext;

    // meta injection waits on a spawned tick; no-op if an executor is installed
    let _ = any_spawner::Executor::init_futures_executor();

    let owner = Owner::new();
    let (meta_context, meta_output) = ServerMetaContext::new();
    let stream = owner.with(|| {
        provide_context(meta_context);
        document(()).to_html_stream_in_order()
    });

    let html = meta_output
        .inject_meta_context(stream)
        .await
        .collect::<String>()
        .await;

    // to_html_stream_in_order() does not emit a doctype
    format!("<!DOCTYPE html>\n{html}")
}
