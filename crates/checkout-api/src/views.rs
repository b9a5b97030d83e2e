//! # Views
//!
//! The three static pages of the checkout flow, rendered inline.

use axum::response::Html;

/// Home page: a minimal storefront that posts the cart to `/paypal` and
/// follows the returned `redirect_url`.
pub fn home_page() -> Html<String> {
    Html(
        r#"<!DOCTYPE html>
<html>
<head><title>Bloom Bhutan</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a2e1a 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <div style="font-size: 60px;">&#127801;</div>
        <h1>Bloom Bhutan</h1>
        <p style="color: #666;">Fresh flowers, delivered.</p>
        <ul style="list-style: none; padding: 0; text-align: left;">
            <li>Rose &mdash; $12.50</li>
            <li>Lily &mdash; $8.25</li>
        </ul>
        <button onclick="checkout()" style="padding: 12px 32px; border: none; border-radius: 8px; background: #16213e; color: white; cursor: pointer;">Checkout</button>
    </div>
    <script>
        async function checkout() {
            const cart = [
                { name: "Rose", price: 12.50 },
                { name: "Lily", price: 8.25 }
            ];
            const response = await fetch("/paypal", {
                method: "POST",
                headers: { "Content-Type": "application/json" },
                body: JSON.stringify({ cart })
            });
            const data = await response.json();
            if (response.ok && data.redirect_url) {
                window.location = data.redirect_url;
            } else {
                alert(data.error || "Checkout failed");
            }
        }
    </script>
</body>
</html>
"#
        .to_string(),
    )
}

/// Success page, rendered after the provider confirms execution
pub fn success_page(message: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Payment Successful</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a2e1a 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <div style="font-size: 60px;">&#9989;</div>
        <h1>Payment Successful!</h1>
        <p style="color: #666;">{}</p>
    </div>
</body>
</html>
"#,
        message
    ))
}

/// Cancel page, rendered when the payer abandons the approval page
pub fn cancel_page(message: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Payment Cancelled</title></head>
<body style="font-family: system-ui; display: flex; justify-content: center; align-items: center; height: 100vh; margin: 0; background: linear-gradient(135deg, #1a2e1a 0%, #16213e 100%);">
    <div style="background: white; padding: 60px; border-radius: 16px; text-align: center;">
        <div style="font-size: 60px;">&#10060;</div>
        <h1>Payment Cancelled</h1>
        <p style="color: #666;">{}</p>
    </div>
</body>
</html>
"#,
        message
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_page_carries_message() {
        let Html(body) = success_page("Payment was successful!");
        assert!(body.contains("Payment was successful!"));
    }

    #[test]
    fn test_cancel_page_carries_message() {
        let Html(body) = cancel_page("Payment has been cancelled.");
        assert!(body.contains("Payment has been cancelled."));
    }
}
