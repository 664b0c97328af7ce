use anyhow::Result;

use tiket_client::TicketApi;
use tiket_core::customer::Customer;
use tiket_core::listing::Listing;

use crate::render;

pub async fn run(api: &TicketApi, query: Option<&str>, page: usize) -> Result<()> {
    let customers = api.customers().await?;

    let mut listing = Listing::new(customers);
    if let Some(query) = query {
        listing.set_query(query);
    }
    listing.go_to_page(page);

    let rows: Vec<Vec<String>> = listing
        .page_items()
        .iter()
        .map(|c: &&Customer| {
            vec![
                c.customer.clone(),
                c.application_name.clone(),
                c.product.clone().unwrap_or_default(),
                c.number_of_download.clone().unwrap_or_default(),
                c.expired_date.clone().unwrap_or_default(),
            ]
        })
        .collect();
    print!(
        "{}",
        render::table(
            &["CUSTOMER", "APPLICATION", "PRODUCT", "DOWNLOADS", "EXPIRES"],
            &[24, 24, 16, 12, 12],
            &rows,
        )
    );
    render::print_page_footer(
        listing.current_page(),
        listing.total_pages(),
        listing.filtered_len(),
    );
    Ok(())
}
