use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{OFFICE_LOCATION, PARTNERSHIP_EMAIL, SUPPORT_EMAIL};
use crate::Route;

#[function_component(LegalLinks)]
fn legal_links() -> Html {
    html! {
        <div class="legal-links">
            <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Hipaa}>{"HIPAA Compliance"}</Link<Route>>
            {" | "}
            <Link<Route> to={Route::Home}>{"Back to BloodLink AI"}</Link<Route>>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <div class="legal-content privacy-policy">
            <h1>{"Privacy Policy"}</h1>

            <section>
                <h2>{"1. Data Collection"}</h2>
                <p>{"Our signup, partnership and scheduling forms ask for:"}</p>
                <ul>
                    <li>{"Contact details (name, email address, phone number)"}</li>
                    <li>{"Donor eligibility details (age, blood type, last donation, medical conditions)"}</li>
                    <li>{"Location (city and state) for proximity matching"}</li>
                    <li>{"Organization details for hospitals, blood banks and NGOs"}</li>
                </ul>
            </section>

            <section>
                <h2>{"2. How Form Data Is Handled"}</h2>
                <p>{"Everything you type into this website stays in your browser:"}</p>
                <ul>
                    <li>{"Form contents are kept in memory only while a dialog is open"}</li>
                    <li>{"Closing a dialog or completing a form discards what was entered"}</li>
                    <li>{"Nothing is written to cookies, local storage or any server"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Consent"}</h2>
                <p>{"Donor profiles are only created after you explicitly accept this policy. You may separately opt in or out of notifications about donation opportunities and health tips."}</p>
            </section>

            <section>
                <h2>{"4. Data Security Measures"}</h2>
                <ul>
                    <li>{"HTTPS encryption for all page delivery"}</li>
                    <li>{"Medical data handled to HIPAA standards once matching is live"}</li>
                    <li>{"Only anonymized data is shared for donor matching"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Your Data Rights"}</h2>
                <p>{"You have the right to:"}</p>
                <ul>
                    <li>{"Access the personal data we hold about you"}</li>
                    <li>{"Correct your contact and eligibility details"}</li>
                    <li>{"Delete your donor profile at any time"}</li>
                </ul>
            </section>

            <section>
                <h2>{"6. Contact Information"}</h2>
                <p>{"For privacy-related inquiries or to exercise your data rights, contact:"}</p>
                <p>{ format!("Email: {}", SUPPORT_EMAIL) }</p>
                <p>{ format!("Location: {}", OFFICE_LOCATION) }</p>
            </section>
            <LegalLinks />
        </div>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <div class="legal-content terms-of-service">
            <h1>{"Terms of Service"}</h1>

            <section>
                <h2>{"1. Service Description"}</h2>
                <p>{"BloodLink AI connects voluntary blood donors with Thalassemia patients, hospitals and blood banks. The platform predicts donor availability, suggests matches and sends donation reminders."}</p>
            </section>

            <section>
                <h2>{"2. Donor Eligibility"}</h2>
                <ul>
                    <li>{"Donors must be between 18 and 65 years old"}</li>
                    <li>{"Donors must disclose medical conditions that may affect donation"}</li>
                    <li>{"Final eligibility is always decided by the collecting blood bank"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Medical Disclaimer"}</h2>
                <p>{"Match suggestions and predictions support, and never replace, the judgement of qualified medical staff. BloodLink AI does not provide medical advice."}</p>
            </section>

            <section>
                <h2>{"4. Partner Responsibilities"}</h2>
                <ul>
                    <li>{"Hospitals and blood banks keep their own records accurate"}</li>
                    <li>{"Partners follow applicable blood transfusion regulations"}</li>
                    <li>{"Partners use donor contact details only for donation coordination"}</li>
                </ul>
            </section>

            <section>
                <h2>{"5. Changes to Terms"}</h2>
                <p>{"We may update these terms. Continued use of the platform after an update means you accept the revised terms."}</p>
            </section>

            <section>
                <h2>{"6. Contact"}</h2>
                <p>{ format!("General questions: {}", SUPPORT_EMAIL) }</p>
                <p>{ format!("Partnership questions: {}", PARTNERSHIP_EMAIL) }</p>
            </section>
            <LegalLinks />
        </div>
    }
}

#[function_component(HipaaCompliance)]
pub fn hipaa_compliance() -> Html {
    html! {
        <div class="legal-content hipaa-compliance">
            <h1>{"HIPAA Compliance"}</h1>

            <section>
                <h2>{"1. Protected Health Information"}</h2>
                <p>{"Blood type, donation history and medical conditions are treated as protected health information throughout the platform."}</p>
            </section>

            <section>
                <h2>{"2. Safeguards"}</h2>
                <ul>
                    <li>{"End-to-end encryption for health data in transit and at rest"}</li>
                    <li>{"Role-based access for hospital and blood bank staff"}</li>
                    <li>{"Audit trails for every access to donor records"}</li>
                    <li>{"Consent-first architecture for any data sharing"}</li>
                </ul>
            </section>

            <section>
                <h2>{"3. Minimum Necessary Use"}</h2>
                <p>{"Matching uses only the fields needed to find a compatible nearby donor. Location is used for proximity matching and nothing else."}</p>
            </section>

            <section>
                <h2>{"4. Business Associate Agreements"}</h2>
                <p>{ format!("Hospital partners sign a business associate agreement before integration. Contact {} to start the process.", PARTNERSHIP_EMAIL) }</p>
            </section>
            <LegalLinks />
        </div>
    }
}
