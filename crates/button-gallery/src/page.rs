use leptos::prelude::*;

use button_web::{BasicButton, Button, ButtonVariant};

use crate::config::GalleryConfig;

const STYLESHEET: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f5f6f8; color: #1f2328; }
.gallery-section { padding: 1rem 1.5rem; border-bottom: 1px solid #d0d7de; }
.gallery-section h2 { font-size: 0.8rem; text-transform: uppercase; letter-spacing: 0.05em; color: #57606a; }
.gallery-grid { display: flex; flex-wrap: wrap; gap: 0.75rem; align-items: center; }
.btn { display: inline-flex; align-items: center; gap: 0.5rem; border: none; border-radius: 4px; color: #fff; cursor: pointer; background-color: var(--btn-primary-color); }
.btn:hover { background-color: var(--btn-hover-color); }
.btn-small { padding: 4px 10px; font-size: 0.8rem; }
.btn-medium { padding: 8px 16px; font-size: 1rem; }
.btn-large { padding: 12px 24px; font-size: 1.2rem; }
.btn-disabled, .btn-loading { opacity: 0.6; cursor: not-allowed; }
.btn-full-width { width: 100%; justify-content: center; }
.btn-spinner { width: 1em; height: 1em; border: 2px solid currentColor; border-right-color: transparent; border-radius: 50%; animation: btn-spin 0.75s linear infinite; }
.visually-hidden { position: absolute; width: 1px; height: 1px; padding: 0; margin: -1px; overflow: hidden; clip: rect(0, 0, 0, 0); white-space: nowrap; border: 0; }
@keyframes btn-spin { to { transform: rotate(360deg); } }
"#;

/// Full HTML document for the gallery.
pub fn shell(config: GalleryConfig) -> impl IntoView {
    let title = config.title.clone();
    let stylesheet = config.stylesheet.then_some(STYLESHEET);
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>{title}</title>
                {stylesheet.map(|css| view! { <style inner_html=css></style> })}
            </head>
            <body>
                <GalleryPage config=config/>
            </body>
        </html>
    }
}

#[component]
fn GallerySection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="gallery-section">
            <h2>{title}</h2>
            <div class="gallery-grid">{children()}</div>
        </section>
    }
}

#[component]
pub fn GalleryPage(config: GalleryConfig) -> impl IntoView {
    let buttons = config
        .buttons
        .iter()
        .map(|entry| {
            let state = entry.resolve();
            view! {
                <Button
                    label=entry.label.clone()
                    button_type=state.button_type
                    disabled=state.disabled
                    loading=state.loading
                    full_width=state.full_width
                    size=state.size
                    variant=state.variant
                    class=entry.class.clone()
                />
            }
        })
        .collect_view();

    view! {
        <main>
            <GallerySection title="Buttons">{buttons}</GallerySection>
            <GallerySection title="Basic">
                <BasicButton>"Basic"</BasicButton>
                <BasicButton disabled=true>"Basic disabled"</BasicButton>
            </GallerySection>
            <GallerySection title="Variants">
                {ButtonVariant::ALL
                    .into_iter()
                    .map(|variant| view! { <Button label=variant.to_string() variant=variant/> })
                    .collect_view()}
            </GallerySection>
        </main>
    }
}

/// Render the gallery to an HTML string under a fresh reactive owner.
pub fn render(config: GalleryConfig) -> String {
    let owner = Owner::new();
    owner.with(|| shell(config).to_html())
}
