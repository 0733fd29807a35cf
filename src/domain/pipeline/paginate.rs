/// `ceil(len / page_size)`, never less than one. A zero page size counts as one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// The half-open slice `[(page - 1) * size, page * size)`, clipped to `items`.
/// Out-of-range pages, including page 0, give an empty slice.
pub fn paginate<T>(items: &[T], page_size: usize, current_page: usize) -> &[T] {
    let page_size = page_size.max(1);
    let Some(index) = current_page.checked_sub(1) else {
        return &[];
    };

    let start = index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
