//! Mapping between persisted entities and transfer objects

use crate::{domain::Intent, dto::IntentDto};

/// Bidirectional mapper between a transfer object `D` and an entity `E`.
///
/// Both directions are total; the list and option forms never map partially.
pub trait EntityMapper<D, E> {
    /// Convert a transfer object into an entity
    fn to_entity(&self, dto: D) -> E;

    /// Convert an entity into a transfer object
    fn to_dto(&self, entity: E) -> D;

    /// Convert a list of transfer objects
    fn to_entities(&self, dtos: Vec<D>) -> Vec<E> {
        dtos.into_iter().map(|dto| self.to_entity(dto)).collect()
    }

    /// Convert a list of entities
    fn to_dtos(&self, entities: Vec<E>) -> Vec<D> {
        entities.into_iter().map(|entity| self.to_dto(entity)).collect()
    }

    /// Absent in, absent out
    fn to_entity_opt(&self, dto: Option<D>) -> Option<E> {
        dto.map(|dto| self.to_entity(dto))
    }

    /// Absent in, absent out
    fn to_dto_opt(&self, entity: Option<E>) -> Option<D> {
        entity.map(|entity| self.to_dto(entity))
    }
}

/// Field-for-field mapper for [`Intent`] and [`IntentDto`]
#[derive(Debug, Clone, Copy, Default)]
pub struct IntentMapper;

impl EntityMapper<IntentDto, Intent> for IntentMapper {
    fn to_entity(&self, dto: IntentDto) -> Intent {
        Intent {
            id: dto.id,
            tag: dto.tag,
            patterns: dto.patterns,
            responses: dto.responses,
            context_set: dto.context_set,
            context_filter: dto.context_filter,
        }
    }

    fn to_dto(&self, entity: Intent) -> IntentDto {
        IntentDto {
            id: entity.id,
            tag: entity.tag,
            patterns: entity.patterns,
            responses: entity.responses,
            context_set: entity.context_set,
            context_filter: entity.context_filter,
        }
    }
}
