//! vnlocale-cli
//! ============
//!
//! Command-line interface for the `vnlocale-core` administrative unit index.
//!
//! The crate's deliverable is the `vnlocale` binary. This library target
//! only exists so the overview below gets rendered.
//!
//! Quick start
//! -----------
//!
//! ```text
//! vnlocale stats
//! vnlocale provinces
//! vnlocale districts 79
//! vnlocale wards 770 --province 79
//! vnlocale search ward "phuong 3" --district 770
//! vnlocale search province "Hồ Chí" --json
//! vnlocale fold "Thành phố Hồ Chí Minh" --keep-case
//! vnlocale snapshot vn.bin && vnlocale --snapshot vn.bin stats
//! ```
//!
//! Set `RUST_LOG` (or pass `--log-level debug`) to see loader and index
//! events on stderr.
#![cfg_attr(docsrs, feature(doc_cfg))]
