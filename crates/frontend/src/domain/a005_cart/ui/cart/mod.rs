use crate::domain::a002_dining_table::ui::TablePicker;
use crate::domain::a002_dining_table::TableSelection;
use crate::domain::a004_order::api::place_order;
use crate::domain::a005_cart::use_cart;
use crate::shared::components::{EmptyState, ProcessingOverlay};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use crate::shared::number_format::format_currency;
use crate::system::auth::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[component]
pub fn CartPage(session: Session) -> impl IntoView {
    let notifier = use_notifier();
    let cart = use_cart();
    let selection = RwSignal::new(TableSelection::default());
    let (table_name, set_table_name) = signal::<Option<String>>(None);
    let (placing, set_placing) = signal(false);

    // Tables of the restaurant the cart belongs to
    let restaurant_id = Signal::derive(move || {
        cart.with(|c| c.restaurant_id().map(str::to_string))
            .or_else(|| session.resource_id())
    });

    // A table picked for another restaurant no longer applies
    Effect::new(move |prev: Option<Option<String>>| {
        let current = restaurant_id.get();
        if prev.is_some_and(|prev| prev != current) {
            selection.update(|s| s.clear());
            set_table_name.set(None);
        }
        current
    });

    let request = Memo::new(move |_| selection.with(|s| cart.with(|c| c.to_request(s))));
    let can_place = move || request.with(|r| r.is_some()) && !placing.get();

    let submit = move |_| {
        let Some(body) = request.get_untracked() else {
            return;
        };
        if placing.get_untracked() {
            return;
        }
        set_placing.set(true);
        spawn_local(async move {
            match place_order(&body).await {
                Ok(reply) => {
                    cart.update(|c| c.clear());
                    selection.try_update(|s| s.clear());
                    set_table_name.try_set(None);
                    notifier.success(reply.message.unwrap_or_else(|| "Order placed".to_string()));
                }
                Err(e) => {
                    log::error!("placing order failed: {}", e);
                    notifier.error(e.user_message());
                }
            }
            set_placing.try_set(false);
        });
    };

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Your cart"</h1>
                </div>
            </div>

            <Show
                when=move || !cart.with(|c| c.is_empty())
                fallback=|| view! { <EmptyState message="Your cart is empty" /> }
            >
                <div class="cart">
                    <div class="cart__lines">
                        {move || cart.with(|c| c.lines().to_vec()).into_iter().map(|line| {
                            let id_inc = line.menu_item_id.clone();
                            let id_dec = line.menu_item_id.clone();
                            let id_remove = line.menu_item_id.clone();
                            view! {
                                <div class="cart-line">
                                    <span class="cart-line__name">{line.name.clone()}</span>
                                    <span class="cart-line__price">{format_currency(line.unit_price)}</span>
                                    <div class="cart-line__qty">
                                        <button class="button button--ghost" title="Less" on:click=move |_| cart.update(|c| c.decrement(&id_dec))>
                                            {icon("minus")}
                                        </button>
                                        <span>{line.quantity}</span>
                                        <button class="button button--ghost" title="More" on:click=move |_| cart.update(|c| c.increment(&id_inc))>
                                            {icon("plus")}
                                        </button>
                                    </div>
                                    <span class="cart-line__total">{format_currency(line.line_total())}</span>
                                    <button class="button button--ghost button--danger" title="Remove" on:click=move |_| cart.update(|c| c.remove(&id_remove))>
                                        {icon("trash")}
                                    </button>
                                </div>
                            }
                        }).collect_view()}
                    </div>

                    <TablePicker
                        restaurant_id=restaurant_id
                        selection=selection
                        on_select=Callback::new(move |name: String| set_table_name.set(Some(name)))
                    />

                    <div class="cart__summary">
                        <div class="cart__row">
                            <span>"Table"</span>
                            <span>{move || table_name.get().unwrap_or_else(|| "not selected".to_string())}</span>
                        </div>
                        <div class="cart__row cart__row--total">
                            <span>"Subtotal"</span>
                            <span>{move || format_currency(cart.with(|c| c.subtotal()))}</span>
                        </div>
                        <button
                            class="button button--primary button--block"
                            disabled=move || !can_place()
                            on:click=submit
                        >
                            {icon("shopping-cart")}
                            "Place order"
                        </button>
                    </div>
                </div>
            </Show>
            <ProcessingOverlay visible=placing message="Placing order..." />
        </div>
    }
}
