// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries over the scheduling tables.
//!
//! All queries use Diesel DSL. `NotFound` results are mapped to typed
//! errors naming the missing entity.

pub mod bookings;
pub mod catalog;
pub mod slots;
