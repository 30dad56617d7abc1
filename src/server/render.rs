//! The two HTML response templates
//!
//! Presentation is kept apart from validation and pricing: handlers hand in
//! plain values and get back a finished fragment. Messages are rendered
//! verbatim; amounts arrive in minor units and are formatted as a decimal
//! with two fraction digits.

/// Format an amount in minor currency units as "D.CC"
pub fn format_amount(minor_units: u64) -> String {
    format!("{}.{:02}", minor_units / 100, minor_units % 100)
}

/// Success fragment: amount charged, card last4, receipt destination
pub fn success_page(contact_name: &str, amount: u64, card_last4: &str, email: &str) -> String {
    format!(
        "<h2>Payment Successful</h2>\n\
         <p>Thanks, {contact_name}! We charged ${amount} to your card ending in {last4}.</p>\n\
         <p>Receipt sent to {email}.</p>\n",
        contact_name = contact_name,
        amount = format_amount(amount),
        last4 = card_last4,
        email = email,
    )
}

/// Failure fragment: the error message verbatim plus a link back to the form
pub fn failure_page(message: &str, form_url: &str) -> String {
    format!(
        "<h2>Payment Failed</h2>\n\
         <p>We couldn't process your payment: {message}</p>\n\
         <p><a href=\"{form_url}\">Go back and try again</a></p>\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount_two_fraction_digits() {
        assert_eq!(format_amount(3999), "39.99");
        assert_eq!(format_amount(7999), "79.99");
        assert_eq!(format_amount(100), "1.00");
        assert_eq!(format_amount(5), "0.05");
        assert_eq!(format_amount(0), "0.00");
    }

    #[test]
    fn test_success_page_contents() {
        let page = success_page("Jo Smith", 17997, "4242", "jo@example.com");
        assert!(page.contains("Payment Successful"));
        assert!(page.contains("Thanks, Jo Smith!"));
        assert!(page.contains("$179.97"));
        assert!(page.contains("ending in 4242"));
        assert!(page.contains("Receipt sent to jo@example.com."));
    }

    #[test]
    fn test_failure_page_contents() {
        let page = failure_page("Your card was declined.", "/order");
        assert!(page.contains("Payment Failed"));
        assert!(page.contains("Your card was declined."));
        assert!(page.contains("<a href=\"/order\">"));
    }
}
