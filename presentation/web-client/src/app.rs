//! Leptos catalog view.

use leptos::*;
use wasm_bindgen::JsCast;

use crate::api::{self, ProductDto};
use crate::catalog::{CartCounter, filter_by_name};

const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Catalog page component.
///
/// Fetches the product list exactly once on mount; the search box filters
/// the in-memory copy, and the cart badge is component-local state that a
/// reload resets.
#[component]
pub fn App() -> impl IntoView {
    let products = create_resource(
        || (),
        |_| async move { api::fetch_products(&api::api_base()).await.unwrap_or_default() },
    );

    let (query, set_query) = create_signal(String::new());
    let cart = create_rw_signal(CartCounter::default());

    let filtered = create_memo(move |_| {
        products
            .get()
            .map(|items| filter_by_name(&items, &query.get()))
    });

    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <div class="site">
            <header class="site-header">
                <div class="brand">
                    <h1>"AgriNova"</h1>
                    <small>"Fertilizer Platform"</small>
                </div>

                <div class="header-controls">
                    // Inert for now; catalog copy is English-only.
                    <select class="lang">
                        <option>"English"</option>
                        <option>"Telugu"</option>
                        <option>"Hindi"</option>
                    </select>

                    <div class="cart">{move || format!("🛒 ({})", cart.get().count())}</div>
                    <div class="profile">"👤"</div>
                </div>
            </header>

            <section class="search-area">
                <input
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                    placeholder="Search fertilizers..."
                />
                <button>"Search"</button>
            </section>

            <main class="grid">
                {move || match filtered.get() {
                    None => view! { <div class="status">"Loading products..."</div> }.into_view(),
                    Some(items) if items.is_empty() => {
                        view! { <div class="status">"No fertilizers found."</div> }.into_view()
                    }
                    Some(items) => items
                        .into_iter()
                        .map(|product| view! { <ProductCard product=product cart=cart/> })
                        .collect_view(),
                }}
            </main>

            <footer class="site-footer">{format!("© {} AgriNova", year)}</footer>
        </div>
    }
}

/// A single catalog card with the cart and buy actions.
#[component]
fn ProductCard(product: ProductDto, cart: RwSignal<CartCounter>) -> impl IntoView {
    let buy_name = product.name.clone();

    view! {
        <article class="card">
            <img
                src=product.image.clone()
                alt=product.name.clone()
                on:error=move |ev| {
                    // Single swap to the bundled placeholder when the asset
                    // is missing.
                    if let Some(img) = ev
                        .target()
                        .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
                    {
                        img.set_src(PLACEHOLDER_IMAGE);
                    }
                }
            />
            <div class="card-body">
                <h3>{product.name.clone()}</h3>
                <div class="meta">
                    <div class="price">{product.price_label.clone()}</div>
                    <div>"Size: " {product.size.clone()}</div>
                    <div class="use">"Use: " {product.usage.clone()}</div>
                </div>
                <div class="actions">
                    <button class="btn cart" on:click=move |_| cart.update(|c| c.add())>
                        "Add to Cart"
                    </button>
                    <button
                        class="btn buy"
                        on:click=move |_| {
                            if let Some(w) = web_sys::window() {
                                let _ = w.alert_with_message(&format!("Buying {}", buy_name));
                            }
                        }
                    >
                        "Buy Now"
                    </button>
                </div>
            </div>
        </article>
    }
}
