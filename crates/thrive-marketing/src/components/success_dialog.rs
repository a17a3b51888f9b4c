//! Acknowledgment shown after a lead is stored

use leptos::*;

#[component]
pub fn SuccessDialog(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="fixed inset-0 z-50 flex items-center justify-center bg-black/50">
                <div class="bg-white rounded-xl shadow-lg p-8 max-w-sm w-full text-center">
                    <div class="text-5xl mb-4">"✓"</div>
                    <h3 class="text-2xl font-bold text-gray-900 mb-2">"Thank You!"</h3>
                    <p class="text-gray-600 mb-6">"Your details were received. We'll be in touch soon."</p>
                    <button
                        class="px-6 py-2 bg-emerald-600 hover:bg-emerald-700 text-white font-semibold rounded-lg transition"
                        on:click=move |_| open.set(false)
                    >
                        "Close"
                    </button>
                </div>
            </div>
        </Show>
    }
}
