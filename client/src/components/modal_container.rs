//! Dismissable modal shell used to host forms.

use leptos::prelude::*;

/// Backdrop + dialog with a title bar. Clicking the backdrop, the close
/// button, or pressing Escape calls `on_close`.
#[component]
pub fn ModalContainer(
    #[prop(into)] title: String,
    #[prop(into)] hidden: Signal<bool>,
    on_close: Callback<()>,
    children: ChildrenFn,
) -> impl IntoView {
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });

    view! {
        <Show when=move || !hidden.get()>
            <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
                <div
                    class="dialog dialog--modal"
                    role="dialog"
                    on:click=move |ev| ev.stop_propagation()
                    on:keydown=move |ev| on_keydown.run(ev)
                    tabindex="0"
                >
                    <div class="dialog__header">
                        <h2>{title.clone()}</h2>
                        <button class="dialog__close" on:click=move |_| on_close.run(()) title="Close">
                            "✕"
                        </button>
                    </div>
                    {children()}
                </div>
            </div>
        </Show>
    }
}
