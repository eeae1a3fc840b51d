use chrono::Datelike;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config::{OFFICE_LOCATION, PARTNERSHIP_EMAIL, SUPPORT_EMAIL, SUPPORT_PHONE};
use crate::content::{RESOURCE_LINKS, SECTION_LINKS};
use crate::forms::schedule::today;
use crate::Route;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = today().year();

    html! {
        <footer id="contact" class="site-footer">
            <div class="footer-grid">
                <div class="footer-about">
                    <div class="nav-logo">
                        <span class="nav-logo-mark">{"❤"}</span>
                        <span class="nav-logo-text">{"BloodLink AI"}</span>
                    </div>
                    <p>
                        {"Revolutionizing blood donation through AI-powered prediction, matching, and engagement to ensure no Thalassemia patient waits for lifesaving blood."}
                    </p>
                </div>

                <div>
                    <h3>{"Platform"}</h3>
                    <ul>
                        { for SECTION_LINKS.iter().take(2).map(|(href, label)| html! {
                            <li><a href={*href}>{ *label }</a></li>
                        }) }
                        <li>
                            <Link<Route> to={Route::Hipaa}>{"Security"}</Link<Route>>
                        </li>
                    </ul>
                </div>

                <div>
                    <h3>{"Resources"}</h3>
                    <ul>
                        { for RESOURCE_LINKS.iter().map(|label| html! {
                            <li><a href="#impact">{ *label }</a></li>
                        }) }
                    </ul>
                </div>

                <div class="footer-contact">
                    <h3>{"Contact Us"}</h3>
                    <p>{"✉ "}<a href={format!("mailto:{}", SUPPORT_EMAIL)}>{ SUPPORT_EMAIL }</a></p>
                    <p>{"📞 "}{ SUPPORT_PHONE }</p>
                    <p>{"📍 "}{ OFFICE_LOCATION }</p>
                    <h4>{"Partnership Inquiries"}</h4>
                    <a class="footer-partnership" href={format!("mailto:{}", PARTNERSHIP_EMAIL)}>
                        { PARTNERSHIP_EMAIL }
                    </a>
                </div>
            </div>

            <div class="footer-bottom">
                <div>
                    { format!("© {} BloodLink AI. All rights reserved. Built with ❤ for Blood Warriors.", year) }
                </div>
                <div class="legal-links">
                    <Link<Route> to={Route::Privacy}>{"Privacy Policy"}</Link<Route>>
                    <Link<Route> to={Route::Terms}>{"Terms of Service"}</Link<Route>>
                    <Link<Route> to={Route::Hipaa}>{"HIPAA Compliance"}</Link<Route>>
                </div>
            </div>

            <style>
                {r#"
.site-footer {
    background: rgba(15, 23, 42, 0.05);
    border-top: 1px solid var(--border);
    padding: 3rem 1.5rem;
}

.footer-grid {
    max-width: 1200px;
    margin: 0 auto;
    display: grid;
    grid-template-columns: repeat(4, 1fr);
    gap: 2rem;
}

.footer-about p {
    margin-top: 1rem;
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.site-footer h3 {
    font-size: 1rem;
    margin-bottom: 1rem;
}

.site-footer ul {
    list-style: none;
    padding: 0;
    font-size: 0.875rem;
}

.site-footer li {
    margin-bottom: 0.5rem;
}

.site-footer a {
    color: var(--muted-foreground);
    text-decoration: none;
    transition: color 0.2s ease;
}

.site-footer a:hover {
    color: var(--primary);
}

.footer-contact p {
    font-size: 0.875rem;
    color: var(--muted-foreground);
    margin-bottom: 0.75rem;
}

.footer-contact h4 {
    font-size: 0.875rem;
    margin: 1.5rem 0 0.5rem;
}

.site-footer .footer-partnership {
    color: var(--primary);
    font-size: 0.875rem;
}

.footer-bottom {
    max-width: 1200px;
    margin: 3rem auto 0;
    padding-top: 2rem;
    border-top: 1px solid var(--border);
    display: flex;
    justify-content: space-between;
    align-items: center;
    font-size: 0.875rem;
    color: var(--muted-foreground);
}

.footer-bottom .legal-links {
    display: flex;
    gap: 1.5rem;
}

@media (max-width: 1024px) {
    .footer-grid {
        grid-template-columns: repeat(2, 1fr);
    }
}

@media (max-width: 768px) {
    .footer-grid {
        grid-template-columns: 1fr;
    }

    .footer-bottom {
        flex-direction: column;
        gap: 1rem;
    }
}
                "#}
            </style>
        </footer>
    }
}
