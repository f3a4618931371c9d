pub(crate) mod localize;
