mod roll_dto;

pub use roll_dto::{RollListQuery, RollSummaryDto, UnitResponseDto};
