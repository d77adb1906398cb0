use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Accepts a credential already issued by the identity provider.
pub fn login_page(error: Option<&str>) -> Markup {
    desktop_layout(
        "Sign in",
        false,
        html! {
            main class="container narrow" {
                h1 { "Sign in" }
                p class="lead" {
                    "Paste the ID token issued by your identity provider."
                }

                @if let Some(error) = error {
                    p class="error" role="alert" { (error) }
                }

                form method="post" action="/login" class="login-form" {
                    label for="user" { "User ID" }
                    input type="text" id="user" name="user" autocomplete="username" required;

                    label for="credential" { "ID token" }
                    input type="password" id="credential" name="credential" required;

                    button type="submit" class="primary" { "Sign in" }
                }
            }
        },
    )
}
