mod tower;
mod product;
pub(crate) mod factorial;
pub(crate) mod pochhammer;
pub(crate) mod multifactorial;
pub(crate) mod subfactorial;
pub(crate) mod stirling;

#[cfg(test)]
mod testutils;

pub(crate) fn init(keywords: &mut crate::keywords::Keywords) {
    tower::init(keywords);
    factorial::init(keywords);
    pochhammer::init(keywords);
    multifactorial::init(keywords);
    subfactorial::init(keywords);
    stirling::init(keywords);
}
