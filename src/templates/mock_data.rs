//! Mock dashboard API template
//!
//! Fixture data the generated pages fall back to when the backend is not
//! running. Times are offsets from load time so the fixtures always look
//! upcoming.

pub(super) const CONTENT: &str = r##"import type { Game, Venue, Notification } from '@app-types/api';

const now = new Date();

export const mockDashboardApi = {
  async getGames(): Promise<Game[]> {
    const baseTime = now.getTime();
    return [
      {
        id: 101,
        sport: 'Futsal',
        location: 'Tundikhel Futsal Court',
        latitude: 27.7172,
        longitude: 85.324,
        gameTime: new Date(baseTime + 3600_000).toISOString(),
        skillLevel: 'INTERMEDIATE',
        description: 'Evening futsal match welcoming all hustle levels.',
        minPlayers: 8,
        maxPlayers: 12,
        currentPlayers: 7,
        pricePerPlayer: 150,
        durationMinutes: 90,
        status: 'ACTIVE',
        createdBy: { id: 1, username: 'sanjay', avatarUrl: '' },
        participants: [],
        venue: { name: 'Tundikhel Futsal Court', address: 'Kathmandu' },
        createdAt: now.toISOString(),
        updatedAt: now.toISOString()
      },
      {
        id: 102,
        sport: 'Basketball',
        location: 'Kathmandu Sports Complex',
        latitude: 27.72,
        longitude: 85.33,
        gameTime: new Date(baseTime + 7200_000).toISOString(),
        skillLevel: 'ADVANCED',
        description: 'Full-court run focused on fast breaks and tight defence.',
        minPlayers: 8,
        maxPlayers: 10,
        currentPlayers: 6,
        pricePerPlayer: 0,
        durationMinutes: 120,
        status: 'ACTIVE',
        createdBy: { id: 2, username: 'anita', avatarUrl: '' },
        participants: [],
        venue: { name: 'Kathmandu Sports Complex', address: 'New Baneshwor' },
        createdAt: now.toISOString(),
        updatedAt: now.toISOString()
      },
      {
        id: 103,
        sport: 'Cricket',
        location: 'TU Cricket Ground',
        latitude: 27.68,
        longitude: 85.31,
        gameTime: new Date(baseTime + 14400_000).toISOString(),
        skillLevel: 'BEGINNER',
        description: 'Friendly practice nets with coaching tips for new players.',
        minPlayers: 12,
        maxPlayers: 20,
        currentPlayers: 14,
        pricePerPlayer: 200,
        durationMinutes: 150,
        status: 'ACTIVE',
        createdBy: { id: 3, username: 'manish', avatarUrl: '' },
        participants: [],
        venue: { name: 'TU Cricket Ground', address: 'Kirtipur' },
        createdAt: now.toISOString(),
        updatedAt: now.toISOString()
      }
    ];
  },
  async getVenues(): Promise<Venue[]> {
    return [
      {
        id: 201,
        name: 'Dasharath Stadium Courts',
        description: 'Multi-purpose courts with locker rooms and cafe.',
        address: 'Tripureshwor, Kathmandu',
        latitude: 27.6938,
        longitude: 85.3142,
        phone: '+977-1-4101234',
        capacity: 40,
        hourlyRate: 1800,
        amenities: ['parking', 'locker_room', 'refreshments', 'wifi', 'security'],
        isActive: true
      },
      {
        id: 202,
        name: 'Bhaktapur Arena',
        description: 'Indoor futsal turf with advanced lighting.',
        address: 'Suryabinayak, Bhaktapur',
        latitude: 27.6713,
        longitude: 85.4376,
        phone: '+977-1-5123456',
        capacity: 18,
        hourlyRate: 1500,
        amenities: ['parking', 'shower', 'first_aid', 'air_conditioning', 'lighting'],
        isActive: true
      }
    ];
  },
  async getNotifications(): Promise<Notification[]> {
    return [
      {
        id: 301,
        userId: 1,
        message: 'You have been added to Futsal Friday Night!',
        type: 'GAME_UPDATE',
        isRead: false,
        createdAt: now.toISOString()
      },
      {
        id: 302,
        userId: 1,
        message: 'Venue booking confirmed at Kathmandu Sports Complex.',
        type: 'BOOKING',
        isRead: true,
        readAt: now.toISOString(),
        createdAt: now.toISOString()
      }
    ];
  },
  async getRecommendations() {
    const games = await this.getGames();
    return games.slice(0, 2).map((game) => ({
      id: game.id,
      title: game.sport + ' spotlight',
      summary: game.description,
      game
    }));
  }
};
"##;
