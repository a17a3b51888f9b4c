//! Main application component

use leptos::*;
use leptos_router::*;
use crate::components::*;
use crate::pages::*;

#[component]
pub fn App() -> impl IntoView {
    let contact_open = create_rw_signal(false);
    let success_open = create_rw_signal(false);

    view! {
        <Router>
            <div class="min-h-screen bg-white">
                <MarketingNav contact_open=contact_open/>
                <main>
                    <Routes>
                        <Route path="/" view=move || view! { <IntroductionPage contact_open=contact_open/> }/>
                    </Routes>
                </main>
                <Footer/>
            </div>
            <ContactDialog open=contact_open success_open=success_open/>
            <SuccessDialog open=success_open/>
        </Router>
    }
}
